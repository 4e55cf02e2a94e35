use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use daywire::app::{App, AppEvent};
use daywire::config::Config;
use daywire::feed::{clamp_to_today, DayKey};
use daywire::storage::{Database, DatabaseError};
use daywire::ui;

/// Get the config directory path (~/.config/daywire/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("daywire");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "daywire", about = "Terminal client for a day-keyed news headlines store")]
struct Args {
    /// Reset database (delete and recreate)
    #[arg(long)]
    reset_db: bool,

    /// Start on this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Keep config and bookmark data user-only on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let config_path = config_dir.join("config.toml");
    let db_path = config_dir.join("headlines.db");

    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Handle --reset-db flag
    if args.reset_db && db_path.exists() {
        std::fs::remove_file(&db_path).context("Failed to delete database")?;
        println!("Database reset.");
    }

    // Open database
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(DatabaseError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of daywire appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open database: {}", e));
        }
    };

    // Resolve the starting day; dates past today land on today
    let today = DayKey::today(config.timezone());
    let start_day = match &args.date {
        Some(raw) => {
            let day = DayKey::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Invalid --date '{}' (use YYYY-MM-DD)", raw))?;
            clamp_to_today(day, today)
        }
        None => today,
    };

    // Create app state
    let mut app =
        App::new(db.clone(), &config, start_day).context("Failed to create application")?;

    // Load persisted bookmarks
    app.bookmarks = db
        .load_bookmarks()
        .await
        .context("Failed to load bookmarks")?;

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Kick off the initial headline load
    app.spawn_feed_load(&event_tx);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
