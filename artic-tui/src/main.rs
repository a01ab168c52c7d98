mod app;
mod buffer;
mod error;
mod input;
mod paths;
mod terminal;
mod text;
mod view;
mod widgets;

use std::fs;
use std::fs::File;

use artic_lib::ArticClient;
use artic_lib::list::ListConfig;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::Result;
use crate::terminal::Terminal;

/// Logs to the cache directory. Without one the app runs unlogged.
fn init_logging() {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else { return };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
        eprintln!("Logging disabled: {}", e);
    }
}

async fn run() -> Result<()> {
    let client = ArticClient::new()?;
    info!("Browsing artworks from {}", client.base_url());

    let mut terminal = Terminal::new()?;
    App::new(client, ListConfig::default()).run(&mut terminal).await
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
