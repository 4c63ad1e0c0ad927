use super::*;
use crate::encode::sink::InMemorySink;

fn opts_for(grid: &Grid) -> AnimateOpts {
    AnimateOpts::for_shape(grid.shape())
}

#[test]
fn rejects_mismatched_grid_shape() {
    let grid = Grid::from_levels(&[vec![1, 0]]);
    let err = generate_frames(&grid, &Strategy::Column, &AnimateOpts::default()).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn rejects_zero_flight_steps() {
    let grid = Grid::from_levels(&[vec![0]]);
    let opts = AnimateOpts {
        flight_steps: 0,
        ..opts_for(&grid)
    };
    assert!(generate_frames(&grid, &Strategy::Column, &opts).is_err());
}

#[test]
fn all_empty_grid_yields_three_frames() {
    let grid = Grid::from_levels(&[vec![0, 0], vec![0, 0], vec![0, 0]]);
    let frames = generate_frames(&grid, &Strategy::Column, &opts_for(&grid)).unwrap();
    assert_eq!(frames.len(), 3);

    // Nothing but field and ship: no enemy or bullet colors anywhere.
    let theme = Theme::github_dark();
    let enemy = theme.enemy_levels[0].to_rgba();
    let bullet = theme.bullet.to_rgba();
    for frame in &frames {
        for px in frame.data.chunks_exact(4) {
            assert_ne!(px, enemy);
            assert_ne!(px, bullet);
        }
    }
}

#[test]
fn frame_count_law_holds_for_shots() {
    // K = 3 populated cells, S = 5 flight steps, no move-only actions:
    // 1 + 3*5 + 2 = 18.
    let grid = Grid::from_levels(&[vec![1, 2], vec![0, 4]]);
    let frames = generate_frames(&grid, &Strategy::Column, &opts_for(&grid)).unwrap();
    assert_eq!(frames.len(), 18);
}

#[test]
fn single_cell_scenario_steps_color_at_hit_resolution() {
    // 1x1 grid, level 3, column order: 1 initial + 5 flight + 2 completion.
    let grid = Grid::from_levels(&[vec![3]]);
    let opts = opts_for(&grid);
    let frames = generate_frames(&grid, &Strategy::Column, &opts).unwrap();
    assert_eq!(frames.len(), 8);

    let theme = &opts.theme;
    let level3 = theme.enemy_levels[2].to_rgba();
    let level2 = theme.enemy_levels[1].to_rgba();
    // Sample a cell corner the bullet disc never covers: the enemy keeps its
    // full-health color through the entire flight, then steps down (not away)
    // once the hit resolves.
    for frame in &frames[..6] {
        assert_eq!(frame.pixel(41, 41), Some(level3));
    }
    for frame in &frames[6..] {
        assert_eq!(frame.pixel(41, 41), Some(level2));
    }
}

#[test]
fn completion_frames_duplicate_the_end_state() {
    let grid = Grid::from_levels(&[vec![2, 0], vec![0, 1]]);
    let frames = generate_frames(&grid, &Strategy::Row, &opts_for(&grid)).unwrap();
    let n = frames.len();
    assert_eq!(frames[n - 1], frames[n - 2]);
}

#[test]
fn frame_ceiling_truncates_without_corruption() {
    let grid = Grid::from_levels(&[vec![1, 1], vec![1, 1], vec![1, 1]]);
    let opts = AnimateOpts {
        max_frames: 7,
        ..opts_for(&grid)
    };
    let frames = generate_frames(&grid, &Strategy::Column, &opts).unwrap();
    // Ceiling bounds the per-step frames; the two completion frames still land.
    assert_eq!(frames.len(), 7 + 2);

    // No bullet is left frozen mid-air in the completion frames.
    let bullet = opts.theme.bullet.to_rgba();
    for frame in &frames[frames.len() - 2..] {
        for px in frame.data.chunks_exact(4) {
            assert_ne!(px, bullet);
        }
    }
}

#[test]
fn animate_streams_frames_through_the_sink() {
    let grid = Grid::from_levels(&[vec![2]]);
    let opts = opts_for(&grid);
    let mut sink = InMemorySink::new();
    animate(&grid, &Strategy::Column, &opts, &mut sink).unwrap();

    assert_eq!(sink.frames().len(), 8);
    let cfg = sink.config().unwrap();
    let (width, height) = canvas_size(opts.shape, &opts.theme);
    assert_eq!((cfg.width, cfg.height), (width, height));
    assert_eq!(cfg.frame_delay_ms, opts.frame_delay_ms);
}
