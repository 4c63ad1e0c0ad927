use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{GridshotError, GridshotResult};
use crate::render::raster::FrameRgba;

/// Sink that encodes pushed frames into an infinitely looping GIF.
///
/// Frames are buffered and the container is written in [`FrameSink::end`];
/// the resulting bytes are available through [`GifSink::into_bytes`]. The
/// pipeline never inspects them.
#[derive(Default)]
pub struct GifSink {
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    bytes: Vec<u8>,
}

impl GifSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded GIF bytes. Empty until [`FrameSink::end`] has run.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> GridshotResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(GridshotError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRgba) -> GridshotResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| GridshotError::encode("push_frame called before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(GridshotError::encode(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let buffer = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| GridshotError::encode("frame buffer length mismatch"))?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        self.frames.push(Frame::from_parts(buffer, 0, 0, delay));
        Ok(())
    }

    fn end(&mut self) -> GridshotResult<()> {
        if self.cfg.is_none() {
            return Err(GridshotError::encode("end called before begin"));
        }

        let mut encoder = GifEncoder::new(&mut self.bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| GridshotError::encode(format!("set gif repeat: {e}")))?;
        encoder
            .encode_frames(self.frames.drain(..))
            .map_err(|e| GridshotError::encode(format!("encode gif frames: {e}")))?;
        // The trailer is written when the encoder drops.
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
