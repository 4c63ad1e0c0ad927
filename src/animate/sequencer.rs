use crate::encode::gif::GifSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{GridshotError, GridshotResult};
use crate::grid::model::{Grid, GridShape};
use crate::render::raster::FrameRgba;
use crate::render::scene::{Theme, canvas_size, render_frame};
use crate::sim::state::GameState;
use crate::strategy::traversal::Strategy;

/// Timing and sizing policy for one animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimateOpts {
    /// Expected grid dimensions; a mismatched grid is rejected up front.
    pub shape: GridShape,
    pub theme: Theme,
    /// Frames a bullet spends in flight per shot.
    pub flight_steps: u32,
    /// Shared per-frame display duration in milliseconds.
    pub frame_delay_ms: u32,
    /// Hard ceiling on rendered frames; dense grids truncate rather than
    /// producing unbounded output.
    pub max_frames: usize,
}

impl Default for AnimateOpts {
    fn default() -> Self {
        Self {
            shape: GridShape::DEFAULT,
            theme: Theme::github_dark(),
            flight_steps: 5,
            frame_delay_ms: 100,
            max_frames: 250,
        }
    }
}

impl AnimateOpts {
    /// Defaults for a non-standard grid shape.
    pub fn for_shape(shape: GridShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }
}

/// Replay the strategy's plan against a fresh simulation and rasterize every
/// step.
///
/// Frame layout: one initial frame (off-grid ship), one frame per move-only
/// action, `flight_steps` frames per shot episode, and two completion frames
/// of hang-time. Once `max_frames` frames have been rendered, the in-flight
/// episode still resolves its hit but no further per-step frames are emitted
/// and remaining actions are skipped; the completion frames are appended
/// regardless.
#[tracing::instrument(skip(grid, opts))]
pub fn generate_frames(
    grid: &Grid,
    strategy: &Strategy,
    opts: &AnimateOpts,
) -> GridshotResult<Vec<FrameRgba>> {
    grid.validate(opts.shape)?;
    if opts.flight_steps == 0 {
        return Err(GridshotError::validation("flight_steps must be > 0"));
    }

    let mut state = GameState::new(grid);
    let mut frames = Vec::new();

    // Initial frame: the ship has not entered the field yet.
    frames.push(render_frame(&state, &opts.theme));

    let actions = strategy.generate_actions(grid);
    tracing::debug!(actions = actions.len(), "planned traversal");

    for action in &actions {
        if frames.len() >= opts.max_frames {
            tracing::debug!(max_frames = opts.max_frames, "frame ceiling reached");
            break;
        }

        state.move_ship(action.week);

        if action.shoot {
            state.fire_at(action.week, action.day);
            for step in 1..=opts.flight_steps {
                state.set_bullet_progress(step as f32 / opts.flight_steps as f32);
                if frames.len() < opts.max_frames {
                    frames.push(render_frame(&state, &opts.theme));
                }
            }
            // Damage lands when the bullet reaches the target; the next frame
            // drawn shows the result.
            state.resolve_hit(action.week, action.day);
            state.clear_bullets();
        } else if frames.len() < opts.max_frames {
            frames.push(render_frame(&state, &opts.theme));
        }
    }

    // Hold the end state so playback does not snap straight back to the start.
    frames.push(render_frame(&state, &opts.theme));
    frames.push(render_frame(&state, &opts.theme));

    tracing::debug!(
        frames = frames.len(),
        complete = state.is_complete(),
        "animation frames generated"
    );
    Ok(frames)
}

/// Generate frames and stream them through `sink`.
#[tracing::instrument(skip(grid, opts, sink))]
pub fn animate(
    grid: &Grid,
    strategy: &Strategy,
    opts: &AnimateOpts,
    sink: &mut dyn FrameSink,
) -> GridshotResult<()> {
    let frames = generate_frames(grid, strategy, opts)?;
    let (width, height) = canvas_size(opts.shape, &opts.theme);
    sink.begin(SinkConfig {
        width,
        height,
        frame_delay_ms: opts.frame_delay_ms,
    })?;
    for frame in &frames {
        sink.push_frame(frame)?;
    }
    sink.end()
}

/// One-shot convenience: animate `grid` into looping GIF bytes.
pub fn animate_gif(grid: &Grid, strategy: &Strategy, opts: &AnimateOpts) -> GridshotResult<Vec<u8>> {
    let mut sink = GifSink::new();
    animate(grid, strategy, opts, &mut sink)?;
    Ok(sink.into_bytes())
}

#[cfg(test)]
#[path = "../../tests/unit/animate/sequencer.rs"]
mod tests;
