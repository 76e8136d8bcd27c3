use anyhow::{Context, Result};
use clap::Parser;

use island_generator::{generate_island, save_island, IslandConfig, OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "island_generator", version)]
#[command(about = "Generate a grayscale island heightmap (writes island.png)")]
struct Args {
    /// Width of the heightmap in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Height of the heightmap in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = IslandConfig::new(args.width as usize, args.height as usize);
    let island = generate_island(&config).context("failed to generate island")?;
    save_island(&island, OUTPUT_PATH).with_context(|| format!("failed to write {}", OUTPUT_PATH))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parses_width_and_height() {
        let args = Args::try_parse_from(["island_generator", "640", "480"]).unwrap();
        assert_eq!((args.width, args.height), (640, 480));
    }

    #[test]
    fn test_missing_height_is_rejected() {
        let err = Args::try_parse_from(["island_generator", "640"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let err = Args::try_parse_from(["island_generator", "wide", "480"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(Args::try_parse_from(["island_generator", "0", "480"]).is_err());
    }
}
