use std::fs;
use std::path::Path;

use docdrift_core::config::{DriftConfig, CONFIG_FILE_NAME};

/// Run `docdrift init`: write a default `.docdrift.json` in the current directory.
pub fn run(force: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("docdrift init: failed to get current directory: {}", e);
            return 2;
        }
    };
    write_default_config(&cwd, force)
}

pub(crate) fn write_default_config(dir: &Path, force: bool) -> i32 {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        eprintln!(
            "docdrift init: {} already exists (use --force to overwrite)",
            config_path.display()
        );
        return 2;
    }

    let content = match serde_json::to_string_pretty(&DriftConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("docdrift init: failed to serialize config: {}", e);
            return 2;
        }
    };

    match fs::write(&config_path, content + "\n") {
        Ok(_) => {
            eprintln!("docdrift init: wrote {}", config_path.display());
            0
        }
        Err(e) => {
            eprintln!("docdrift init: failed to write {}: {}", config_path.display(), e);
            2
        }
    }
}
