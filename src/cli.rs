use crate::constants::{API_KEY_VAR, DEFAULT_BATCH_SIZE, DEFAULT_LEDGER_PATH, DEFAULT_ROOT_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-shrink",
    about = "Batch image compression via the TinyPNG API with a content-hash ledger",
    long_about = "img-shrink walks a directory tree, uploads images that have not been \
                  compressed yet to the TinyPNG API, replaces each file in place with the \
                  compressed result, and records a content hash so the same bytes are never \
                  submitted twice.",
    version,
    after_help = "EXAMPLES:\n  \
    img-shrink run ./docs\n  \
    img-shrink run ./assets -b 5 -l .shrink.db\n  \
    img-shrink compress hero.png hero-small.png\n  \
    img-shrink status ./docs"
)]
pub struct Args {
    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress every new image under a directory",
        long_about = "Recursively scan a directory for png/jpg/jpeg/webp/avif files, skip the \
                      ones whose content hash is already in the ledger, and compress the rest \
                      in concurrent batches, replacing each file in place."
    )]
    Run {
        #[arg(default_value = DEFAULT_ROOT_DIR, help = "Directory to scan")]
        directory: PathBuf,

        #[arg(
            short = 'b',
            long,
            default_value_t = DEFAULT_BATCH_SIZE,
            help = "Jobs dispatched concurrently per batch",
            long_help = "Number of compression jobs dispatched concurrently per batch. \
                         The next batch starts only after every job in the current one resolves."
        )]
        batch_size: usize,

        #[arg(short = 'l', long, default_value = DEFAULT_LEDGER_PATH, help = "Ledger file path")]
        ledger: PathBuf,

        #[arg(
            short = 'k',
            long,
            env = API_KEY_VAR,
            hide_env_values = true,
            help = "TinyPNG API key"
        )]
        api_key: Option<String>,
    },

    #[command(
        about = "Compress a single image file",
        long_about = "Compress one file through the remote API. The result overwrites the \
                      input unless an output path is given. Files whose content is already \
                      in the ledger are skipped unless --force is set."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(help = "Output path (defaults to overwriting the input)")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Recompress even if the content is already recorded")]
        force: bool,

        #[arg(short = 'l', long, default_value = DEFAULT_LEDGER_PATH, help = "Ledger file path")]
        ledger: PathBuf,

        #[arg(
            short = 'k',
            long,
            env = API_KEY_VAR,
            hide_env_values = true,
            help = "TinyPNG API key"
        )]
        api_key: Option<String>,
    },

    #[command(about = "Show how many images are pending vs already compressed")]
    Status {
        #[arg(default_value = DEFAULT_ROOT_DIR, help = "Directory to scan")]
        directory: PathBuf,

        #[arg(short = 'l', long, default_value = DEFAULT_LEDGER_PATH, help = "Ledger file path")]
        ledger: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let args = Args::parse_from(["img-shrink", "run"]);
        match args.command {
            Commands::Run {
                directory,
                batch_size,
                ledger,
                ..
            } => {
                assert_eq!(directory, PathBuf::from(DEFAULT_ROOT_DIR));
                assert_eq!(batch_size, DEFAULT_BATCH_SIZE);
                assert_eq!(ledger, PathBuf::from(DEFAULT_LEDGER_PATH));
            }
            _ => panic!("expected run subcommand"),
        }
    }
}
