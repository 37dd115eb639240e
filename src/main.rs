use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use todor::{TodoItem, TodoStore};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todor")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("todor.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let todo_file = &config.storage.todo_file;
    if let Some(parent) = todo_file.parent() {
        fs::create_dir_all(parent).context("Failed to create todo directory")?;
    }

    let mut store = TodoStore::open(todo_file);

    match &cli.command {
        Commands::Add { text } => handle_add_command(&mut store, text),
        Commands::Toggle { id } => handle_toggle_command(&mut store, *id),
        Commands::Rm { id } => handle_rm_command(&mut store, *id),
        Commands::List { completed, pending } => handle_list_command(&store, *completed, *pending),
    }
}

fn handle_add_command(store: &mut TodoStore, text: &str) -> Result<()> {
    info!("Adding item: {}", text);
    let item = store.add(text);
    println!("{} {} (id {})", "Added:".green(), item.text, item.id);
    Ok(())
}

fn handle_toggle_command(store: &mut TodoStore, id: i64) -> Result<()> {
    info!("Toggling item: {}", id);
    if store.toggle(id) {
        println!("{} {}", "Toggled:".green(), id);
    } else {
        println!("{} no item with id {}", "Not found:".red(), id);
    }
    Ok(())
}

fn handle_rm_command(store: &mut TodoStore, id: i64) -> Result<()> {
    info!("Removing item: {}", id);
    if store.remove(id) {
        println!("{} {}", "Removed:".green(), id);
    } else {
        println!("{} no item with id {}", "Not found:".red(), id);
    }
    Ok(())
}

fn handle_list_command(store: &TodoStore, completed: bool, pending: bool) -> Result<()> {
    let items: Vec<TodoItem> = if completed {
        store.get_completed()
    } else if pending {
        store.get_pending()
    } else {
        store.get_all().to_vec()
    };

    if items.is_empty() {
        println!("{}", "No items".yellow());
        return Ok(());
    }

    for item in &items {
        let mark = if item.completed { "[x]".green() } else { "[ ]".normal() };
        println!("{} {} {}", mark, item.id.to_string().dimmed(), item.text);
    }
    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    run_application(&cli, &config)
}
