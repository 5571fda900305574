//! # CLI Adapter
//!
//! Text rendering of the catalog and a line-oriented command loop.
//! This is the only module that writes to the terminal.
//!
//! ## Interactive Loop
//!
//! The view model lives on the loop task and is never shared. Fetches run on
//! spawned tasks and report back through an mpsc channel, so filter commands
//! keep working while a fetch is in flight.

mod command;

pub use command::{Command, parse_command};

use log::{debug, info, warn};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, Sender};

use foodmart::core::model::CatalogData;
use foodmart::core::state::{Catalog, LoadingState};
use foodmart::{FoodListViewModel, RepositoryError};

/// Shown next to items whose category wasn't in the last fetch.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

type FetchResult = Result<CatalogData, RepositoryError>;

/// One-line status for anything other than a populated list, or None.
pub fn status_line(catalog: &Catalog) -> Option<String> {
    if catalog.is_empty_result() {
        let message = if catalog.items.is_empty() {
            "No items available."
        } else {
            "No items match the selected categories."
        };
        return Some(message.to_string());
    }
    match &catalog.loading {
        LoadingState::Idle => Some("Not loaded yet.".to_string()),
        LoadingState::Loading if catalog.filtered.is_empty() => Some("Loading...".to_string()),
        LoadingState::Error(message) => Some(format!("Error: {message}")),
        LoadingState::Loading | LoadingState::Success => None,
    }
}

/// Writes the filtered items, one per line, or only the status line.
/// While refreshing, the items already on screen stay listed.
pub fn render_catalog(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    if let Some(status) = status_line(catalog) {
        writeln!(out, "{status}")?;
        return Ok(());
    }

    for item in &catalog.filtered {
        let category = catalog
            .category_name(&item.category_id)
            .unwrap_or(UNKNOWN_CATEGORY);
        writeln!(
            out,
            "{:<28} {:>10}  {}",
            item.name,
            item.formatted_price(),
            category
        )?;
    }

    if let Some(updated) = catalog.last_updated {
        writeln!(
            out,
            "{} of {} items, updated {}",
            catalog.filtered.len(),
            catalog.items.len(),
            updated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
    }
    Ok(())
}

/// Writes every category with its selection mark.
pub fn render_categories(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    if let Some(message) = catalog.loading.error_message() {
        writeln!(out, "Error: {message}")?;
        return Ok(());
    }
    for category in &catalog.categories {
        let mark = if catalog.is_selected(&category.id) { "x" } else { " " };
        writeln!(out, "[{mark}] {:<20} {}", category.name, category.id)?;
    }
    Ok(())
}

/// Starts a fetch on a background task. Returns false if one is already running.
fn spawn_fetch(view_model: &mut FoodListViewModel, tx: &Sender<FetchResult>) -> bool {
    if !view_model.begin_load() {
        return false;
    }
    let repository = view_model.repository();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = repository.fetch_all_data().await;
        if tx.send(result).await.is_err() {
            warn!("Fetch finished after the command loop exited");
        }
    });
    true
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run_interactive(mut view_model: FoodListViewModel) -> io::Result<()> {
    let (tx, mut rx) = mpsc::channel::<FetchResult>(4);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", Command::HELP)?;
    spawn_fetch(&mut view_model, &tx);
    render_catalog(view_model.catalog(), &mut stdout)?;

    loop {
        tokio::select! {
            Some(result) = rx.recv() => {
                view_model.complete_load(result);
                render_catalog(view_model.catalog(), &mut stdout)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("stdin closed, leaving interactive mode");
                    break;
                };
                debug!("Command line: {:?}", line);
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => writeln!(stdout, "{}", Command::HELP)?,
                    Some(Command::List) => render_catalog(view_model.catalog(), &mut stdout)?,
                    Some(Command::Categories) => render_categories(view_model.catalog(), &mut stdout)?,
                    Some(Command::Toggle(id)) => {
                        view_model.toggle_category(id);
                        render_catalog(view_model.catalog(), &mut stdout)?;
                    }
                    Some(Command::Clear) => {
                        view_model.clear_filters();
                        render_catalog(view_model.catalog(), &mut stdout)?;
                    }
                    Some(Command::Refresh) | Some(Command::Retry) => {
                        if spawn_fetch(&mut view_model, &tx) {
                            writeln!(stdout, "Loading...")?;
                        } else {
                            writeln!(stdout, "Already loading.")?;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => writeln!(stdout, "Unknown command: {}", line.trim())?,
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}
