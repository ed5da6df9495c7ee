use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use item_directory::api::HttpItemApi;
use item_directory::cli::{self, Args};
use item_directory::core::config;
use item_directory::core::store::ItemStore;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to item-directory.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("item-directory.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        eprintln!("warning: {e}, using defaults");
        config::DirectoryConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Item directory starting up against {}", resolved.base_url);

    let api = HttpItemApi::with_timeout(resolved.base_url, resolved.timeout);
    let mut store = ItemStore::new(Arc::new(api));

    match cli::run(&mut store, args.command).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
