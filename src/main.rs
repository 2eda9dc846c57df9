use anyhow::Result;
use clap::Parser;
use grid_snake::app::App;
use grid_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Side length of the square game grid
    #[arg(long, default_value = "20")]
    grid_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.grid_size);

    App::new(config).run().await
}
