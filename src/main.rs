use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmdpat::cli::{Cli, Commands, run_complete, run_match, run_validate};
use cmdpat::config::{Config, ConfigLoader, ConfigSource, DefaultConfigLoader};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CMDPAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<(Config, Vec<ConfigSource>), anyhow::Error> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loader = DefaultConfigLoader::new();
    let config = loader
        .load(&cwd)
        .map_err(|e| anyhow::anyhow!("config error: {e}"))?;
    Ok((config, loader.sources(&cwd)))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    let result = match cli.command {
        Commands::Match(args) => run_match(&args, &mut stdout, &mut stderr),
        Commands::Complete(args) => {
            load_config().and_then(|(config, _)| run_complete(&args, &config, &mut stdout))
        }
        Commands::Validate => load_config()
            .and_then(|(config, sources)| run_validate(&config, &sources, &mut stdout)),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("cmdpat: {e}");
            ExitCode::from(2)
        }
    }
}
