use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// printwatch - watch folders and print new documents
#[derive(Parser, Debug)]
#[command(name = "printwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.printwatch/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Simulate printing; no job reaches a real printer
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the configured folders and report new documents
    Watch {
        /// Print every discovered document (overrides config)
        #[arg(long)]
        auto_print: bool,

        /// Extra folder to watch for this session (repeatable)
        #[arg(short, long = "folder", value_name = "DIR")]
        folders: Vec<PathBuf>,
    },

    /// Print one or more documents
    Print {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Printer name (default: config, then system default)
        #[arg(short, long)]
        printer: Option<String>,

        /// Paper size label (A4, A5, Letter, Legal)
        #[arg(long)]
        paper_size: Option<String>,

        /// Number of copies
        #[arg(short = 'n', long)]
        copies: Option<u32>,

        /// Print on both sides
        #[arg(long)]
        duplex: bool,
    },

    /// Show document metadata
    Info {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List installed printers
    Printers {
        /// List supported paper sizes instead
        #[arg(long)]
        paper_sizes: bool,
    },

    /// Show print history
    History {
        /// Remove all history records
        #[arg(long)]
        clear: bool,
    },

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Add a folder to watch
    AddFolder {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Stop watching a folder
    RemoveFolder {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Allow an extension (e.g. ".odt" or "odt")
    AddExtension {
        #[arg(value_name = "EXT")]
        ext: String,
    },

    /// Disallow an extension
    RemoveExtension {
        #[arg(value_name = "EXT")]
        ext: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_watch() {
        let cli = Cli::try_parse_from([
            "printwatch",
            "watch",
            "--auto-print",
            "--folder",
            "/tmp/in",
            "-f",
            "/tmp/other",
        ])
        .unwrap();
        match cli.command {
            Commands::Watch {
                auto_print,
                folders,
            } => {
                assert!(auto_print);
                assert_eq!(
                    folders,
                    vec![PathBuf::from("/tmp/in"), PathBuf::from("/tmp/other")]
                );
            }
            other => panic!("Expected Watch command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_print_with_options() {
        let cli = Cli::try_parse_from([
            "printwatch",
            "print",
            "a.pdf",
            "b.txt",
            "--printer",
            "P1",
            "--paper-size",
            "Letter",
            "-n",
            "2",
            "--duplex",
        ])
        .unwrap();
        if let Commands::Print {
            files,
            printer,
            paper_size,
            copies,
            duplex,
        } = cli.command
        {
            assert_eq!(files.len(), 2);
            assert_eq!(printer.as_deref(), Some("P1"));
            assert_eq!(paper_size.as_deref(), Some("Letter"));
            assert_eq!(copies, Some(2));
            assert!(duplex);
        } else {
            panic!("Expected Print command");
        }
    }

    #[test]
    fn test_cli_print_requires_a_file() {
        assert!(Cli::try_parse_from(["printwatch", "print"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["printwatch", "printers", "--json", "-vv", "--dry-run"])
            .unwrap();
        assert!(cli.json);
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_config_defaults_to_show() {
        let cli = Cli::try_parse_from(["printwatch", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));

        let cli = Cli::try_parse_from(["printwatch", "config", "add-extension", "ODT"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::AddExtension { ref ext })
            } if ext == "ODT"
        ));
    }
}
