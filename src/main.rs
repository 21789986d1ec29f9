use clap::Parser;
use img_shrink::cli::{Args, Commands};
use img_shrink::error::Result;
use img_shrink::ledger::Ledger;
use img_shrink::{batch, error, logger, status, Config};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    if let Err(e) = dispatch(args.command).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            directory,
            batch_size,
            ledger,
            api_key,
        } => {
            let config = Config {
                api_key,
                batch_size,
                ledger_path: ledger,
            };
            batch::shrink_directory(&directory, &config).await
        }
        Commands::Compress {
            input,
            output,
            force,
            ledger,
            api_key,
        } => {
            let config = Config {
                api_key,
                ledger_path: ledger,
                ..Config::default()
            };
            batch::shrink_file(&input, output.as_deref(), force, &config).await
        }
        Commands::Status { directory, ledger } => {
            status::report_status(&directory, &Ledger::new(ledger)).await
        }
    }
}
