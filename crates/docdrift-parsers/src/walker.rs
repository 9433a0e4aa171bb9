use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Per-directory ignore file honored alongside `.gitignore`.
pub const IGNORE_FILE_NAME: &str = ".docdriftignore";

/// Directory names never descended into below the walk root.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "venv",
    ".venv",
    "dist",
    "build",
];

pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// All regular files under the root, sorted. A file root yields itself.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .require_git(false)
            .add_custom_ignore_filename(IGNORE_FILE_NAME)
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().map_or(false, |ft| ft.is_dir())
                    || !SKIP_DIRS.iter().any(|d| entry.file_name() == *d)
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().map_or(false, |ft| ft.is_file()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        files
    }
}
