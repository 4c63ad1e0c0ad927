use crate::foundation::error::GridshotResult;
use crate::render::raster::FrameRgba;

/// Configuration provided to a [`FrameSink`] before any frames are pushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels; every pushed frame must match.
    pub width: u32,
    /// Frame height in pixels; every pushed frame must match.
    pub height: u32,
    /// Shared per-frame display duration in milliseconds.
    pub frame_delay_ms: u32,
}

/// Sink contract for consuming rendered frames in playback order.
///
/// The sequencer calls `begin` once, then `push_frame` once per frame in
/// order, then `end` once. What the sink does with the frames (GIF encoding,
/// buffering for tests) is opaque to the pipeline.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GridshotResult<()>;
    /// Push one frame in playback order.
    fn push_frame(&mut self, frame: &FrameRgba) -> GridshotResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GridshotResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameRgba>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames pushed so far, in playback order.
    pub fn frames(&self) -> &[FrameRgba] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GridshotResult<()> {
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRgba) -> GridshotResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> GridshotResult<()> {
        Ok(())
    }
}
