use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Inspect page layout and extract template fields from page-text JSON files.
#[derive(Debug, Parser)]
#[command(name = "pdfanchor", about, version)]
pub struct Cli {
    /// Log to stderr (-v debug, -vv trace). RUST_LOG is used when absent
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct visual lines
    Lines {
        /// Path to the page-text JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Reconstruct and classify paragraphs
    Paragraphs {
        /// Path to the page-text JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Known anchor label; may be repeated
        #[arg(long = "anchor", value_name = "TEXT")]
        anchors: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run an extraction template over one or more documents
    Extract {
        /// Path to the template JSON file
        #[arg(short, long)]
        template: PathBuf,

        /// Page-text JSON files, one document each
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract the text inside a box given in page percentages
    Region {
        /// Path to the page-text JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Box as 'xmin,ymin,xmax,ymax' in percent of the page size
        #[arg(long, allow_hyphen_values = true)]
        bbox: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Select fragments by center point instead of overlap
        #[arg(long)]
        center: bool,

        /// Center-mode tolerance in pixels (default: 3.0)
        #[arg(long, default_value_t = 3.0)]
        tolerance: f64,

        /// Field name to strip from the start of the value
        #[arg(long)]
        label: Option<String>,
    },
}

/// Output format for inspection and extraction subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_extract_multiple_files() {
        let cli = Cli::parse_from(["pdfanchor", "extract", "-t", "t.json", "a.json", "b.json"]);
        match cli.command {
            Commands::Extract { template, files, .. } => {
                assert_eq!(template, PathBuf::from("t.json"));
                assert_eq!(files.len(), 2);
            }
            _ => panic!("expected Extract subcommand"),
        }
    }

    #[test]
    fn parse_repeated_anchors_and_verbosity() {
        let cli = Cli::parse_from([
            "pdfanchor", "-vv", "paragraphs", "p.json", "--anchor", "Total", "--anchor", "Date",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Paragraphs { anchors, .. } => assert_eq!(anchors, vec!["Total", "Date"]),
            _ => panic!("expected Paragraphs subcommand"),
        }
    }

    #[test]
    fn parse_region_defaults() {
        let cli = Cli::parse_from(["pdfanchor", "region", "p.json", "--bbox", "0,0,50,10"]);
        match cli.command {
            Commands::Region {
                page,
                center,
                tolerance,
                label,
                ..
            } => {
                assert_eq!(page, 1);
                assert!(!center);
                assert_eq!(tolerance, 3.0);
                assert!(label.is_none());
            }
            _ => panic!("expected Region subcommand"),
        }
    }
}
