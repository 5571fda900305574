mod cli;

use clap::Parser;
use foodmart::core::config::{FoodMartConfig, load_config, resolve};
use foodmart::{FoodListViewModel, RemoteFoodRepository};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "foodmart", about = "Browse the FoodMart catalog")]
struct Args {
    /// API base URL (overrides the config file and FOODMART_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Only show items in this category id (repeatable)
    #[arg(short, long = "category", value_name = "ID")]
    categories: Vec<String>,

    /// List categories instead of items
    #[arg(long = "categories")]
    list_categories: bool,

    /// Keep running and read commands from stdin
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}; using defaults");
            FoodMartConfig::default()
        }
    };
    let resolved = resolve(&config, args.base_url.as_deref());

    // File logger; stdout is for the catalog itself
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("FoodMart starting up against {}", resolved.base_url);

    let repository = Arc::new(RemoteFoodRepository::with_base_url(resolved.base_url.clone()));
    let mut view_model = FoodListViewModel::new(repository);
    for id in args.categories {
        if !view_model.catalog().is_selected(&id) {
            view_model.toggle_category(id);
        }
    }

    if args.interactive {
        return match cli::run_interactive(view_model).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::warn!("Interactive session ended with I/O error: {}", e);
                eprintln!("I/O error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    view_model.load().await;

    let mut stdout = std::io::stdout().lock();
    let written = if args.list_categories {
        cli::render_categories(view_model.catalog(), &mut stdout)
    } else {
        cli::render_catalog(view_model.catalog(), &mut stdout)
    };
    if let Err(e) = written {
        eprintln!("I/O error: {e}");
        return ExitCode::FAILURE;
    }

    if view_model.loading_state().error_message().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
