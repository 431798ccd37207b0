use backlog_core::storage::config::Config;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    // log records from backlog-core are bridged by the default tracing-log feature
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config_dir.as_deref().map(Config::file_in);
    if let Some(path) = &config_path {
        log::debug!("using config file {}", path.display());
    }

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(config, config_path, cli.url, cli.api_key);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
