//! Gridshot renders a GitHub-style contribution calendar as an animated
//! space-shooter GIF: a ship below the grid clears every populated cell in a
//! configurable traversal order.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `Strategy + Grid -> Vec<Action>` (which cells to shoot, in what order)
//! 2. **Simulate**: `GameState` applies one action at a time (ship, enemies, bullets)
//! 3. **Render**: `render_frame(&GameState, &Theme) -> FrameRgba` (CPU raster)
//! 4. **Encode**: frames stream through a [`FrameSink`] (looping GIF by default)
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: planning, simulation, and rendering are pure
//!   for a given input; only the unseeded random strategy draws entropy.
//! - **No IO in the core**: rendering writes to in-memory rasters; the grid is
//!   supplied as an in-memory structure and the encoder output is opaque bytes.
#![forbid(unsafe_code)]

mod animate;
mod encode;
mod foundation;
mod grid;
mod render;
mod sim;
mod strategy;

pub use animate::sequencer::{AnimateOpts, animate, animate_gif, generate_frames};
pub use encode::gif::GifSink;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::color::Rgb8;
pub use foundation::error::{GridshotError, GridshotResult};
pub use grid::model::{Cell, Grid, GridShape, Week};
pub use render::raster::FrameRgba;
pub use render::scene::{Theme, canvas_size, render_frame};
pub use sim::state::{Bullet, Enemy, GameState, Ship};
pub use strategy::traversal::{Action, Strategy};
