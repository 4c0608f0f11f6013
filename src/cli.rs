//! CLI argument parsing for Criba

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "criba")]
#[command(version)]
#[command(about = "Filter a list of JUnit XML test reports down to the failing ones", long_about = None)]
pub struct Cli {
    /// Files containing report paths, one per line (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args_reads_stdin() {
        let cli = Cli::parse_from(["criba"]);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_cli_collects_files_in_order() {
        let cli = Cli::parse_from(["criba", "first.txt", "second.txt"]);
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.files[0], PathBuf::from("first.txt"));
        assert_eq!(cli.files[1], PathBuf::from("second.txt"));
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["criba", "--debug"]);
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["criba", "list.txt"]);
        assert!(!cli.debug);
    }
}
