use clap::Parser;
use std::path::PathBuf;

/// Build a Google Earth KML map of a cruise from its CTD, XBT and
/// TSG NetCDF files.
///
/// Each station or profile is clickable and displays its plot;
/// the ship's track displays the underway surface data plot.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display debug information.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Report execution time.
    #[arg(short, long, default_value_t = false)]
    pub time: bool,

    /// Output directory, created if missing.
    #[arg(short, long, default_value = "examples")]
    pub out: PathBuf,

    /// TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["oceano2kml"]);
        assert!(!cli.debug);
        assert!(!cli.time);
        assert_eq!(cli.out, Path::new("examples"));
        assert_eq!(cli.config, Path::new("config.toml"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["oceano2kml", "-d", "-t", "-o", ".", "-c", "amazomix.toml"]);
        assert!(cli.debug);
        assert!(cli.time);
        assert_eq!(cli.out, Path::new("."));
        assert_eq!(cli.config, Path::new("amazomix.toml"));
    }

    #[test]
    fn test_command() {
        Cli::command().debug_assert();
    }
}
