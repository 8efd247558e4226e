//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tasklist_core` linkage and print the page for the local slot
//!   database without mutating it beyond hydration.

use std::path::PathBuf;
use tasklist_core::view::{render_config_panel, render_page, render_page_text};
use tasklist_core::{DAppConfig, SlotStorage, SqliteKeyValueStore, TodoStore};

const DEFAULT_DB_FILE_NAME: &str = "tasklist_slots.sqlite3";

fn main() {
    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    let panel = render_config_panel(&DAppConfig::from_env());
    println!("config={}", panel.title);
    for warning in &panel.warnings {
        println!("config_warning={warning}");
    }

    let db_path = std::env::var("TASKLIST_DB_PATH")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));

    match SqliteKeyValueStore::open(&db_path) {
        Ok(backend) => {
            let mut store = TodoStore::new(SlotStorage::new(backend));
            store.hydrate();
            print!("\n{}", render_page_text(&render_page(&store)));
        }
        Err(err) => eprintln!("failed to open {}: {err}", db_path.display()),
    }
}
