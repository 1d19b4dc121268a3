use clap::Parser;
use std::process::exit;
use world_bmp::{world_bmp, WorldBmpArgs};

/// Parse command line arguments, write the world map bitmap.
fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args: WorldBmpArgs = WorldBmpArgs::parse();
    if let Err(err) = world_bmp(&args) {
        eprintln!("{}", err);
        exit(1);
    }
}
