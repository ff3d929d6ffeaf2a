use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retc-processor")]
#[command(about = "Download and filter RETC point-source emission spreadsheets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress bars")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: ./retc.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download every spreadsheet linked from the RETC dataset page
    Fetch {
        #[arg(long, help = "Listing page URL [default: settings source_url]")]
        url: Option<String>,

        #[arg(long, help = "Download directory [default: descargas_retc]")]
        dest_dir: Option<PathBuf>,
    },

    /// Filter all downloaded RUEA-EFP files by region
    Filter {
        #[arg(
            long,
            default_value = ".",
            help = "Root directory containing descargas_retc/ and datos/"
        )]
        root: PathBuf,

        #[arg(
            long,
            help = "Exact region name to keep [default: Metropolitana de Santiago]"
        )]
        region: Option<String>,

        #[arg(
            long,
            default_value = "",
            help = "Optional prefix for output file names (e.g. 'RM_')"
        )]
        outprefix: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_filter_defaults() {
        let cli = Cli::parse_from(["retc-processor", "filter"]);
        match cli.command {
            Commands::Filter {
                root,
                region,
                outprefix,
            } => {
                assert_eq!(root, PathBuf::from("."));
                assert_eq!(region, None);
                assert_eq!(outprefix, "");
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_filter_flags() {
        let cli = Cli::parse_from([
            "retc-processor",
            "filter",
            "--root",
            "/data",
            "--region",
            "Los Lagos",
            "--outprefix",
            "LL_",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Filter {
                root,
                region,
                outprefix,
            } => {
                assert_eq!(root, PathBuf::from("/data"));
                assert_eq!(region.as_deref(), Some("Los Lagos"));
                assert_eq!(outprefix, "LL_");
            }
            _ => panic!("expected filter command"),
        }
    }
}
