pub mod raster;
pub mod scene;
