use anyhow::Result;
use clap::Parser;
use log::info;

use randtex::{ViewerBuilder, GRID_HEIGHT, GRID_WIDTH, PIXEL_SCALE};

/// Generate a random color grid and display it until the window is closed
#[derive(Parser)]
#[command(name = "randtex", version, about)]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: u32,

    /// Screen pixels per cell edge
    #[arg(short, long, default_value_t = PIXEL_SCALE)]
    scale: u32,

    /// Random seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Print the generated grid to stdout
    #[arg(short, long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = ViewerBuilder::with_dimensions(cli.width, cli.height).scale(cli.scale);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let viewer = builder.build()?;

    info!(
        "generated {}x{} grid, window {}x{}",
        cli.width,
        cli.height,
        viewer.frame_buffer().width(),
        viewer.frame_buffer().height()
    );

    if cli.dump {
        print!("{}", viewer.texture());
    }

    viewer.run();
    info!("window closed");

    Ok(())
}
