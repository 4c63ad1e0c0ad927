use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

use gridshot::{AnimateOpts, Grid, Strategy, animate_gif};

#[derive(Parser, Debug)]
#[command(name = "gridshot", version)]
struct Cli {
    /// Input contribution grid JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Traversal strategy: column, row, or random. Unknown names fall back to
    /// random.
    #[arg(long, default_value = "random")]
    strategy: String,

    /// Seed for the random strategy (reproducible output).
    #[arg(long)]
    seed: Option<u64>,

    /// Per-frame delay in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u32,

    /// Hard ceiling on rendered frames.
    #[arg(long, default_value_t = 250)]
    max_frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let grid = read_grid_json(&cli.in_path)?;

    let mut strategy = Strategy::from_name(&cli.strategy);
    if let Strategy::Random { seed } = &mut strategy {
        *seed = cli.seed;
    }

    let opts = AnimateOpts {
        shape: grid.shape(),
        frame_delay_ms: cli.delay_ms,
        max_frames: cli.max_frames,
        ..AnimateOpts::default()
    };

    let bytes = animate_gif(&grid, &strategy, &opts)?;
    std::fs::write(&cli.out, bytes)
        .with_context(|| format!("write gif '{}'", cli.out.display()))?;
    Ok(())
}

fn read_grid_json(path: &Path) -> anyhow::Result<Grid> {
    let f = File::open(path).with_context(|| format!("open grid '{}'", path.display()))?;
    let r = BufReader::new(f);
    let grid: Grid = serde_json::from_reader(r).with_context(|| "parse grid JSON")?;
    Ok(grid)
}
