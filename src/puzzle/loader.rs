use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

use super::catalog::Catalog;
use super::types::Level;

const LEVEL_FILE_PATTERN: &str = "level_*.toml";

const BUILTIN_LEVELS: [(&str, &str); 3] = [
    ("level_01.toml", include_str!("../../puzzles/level_01.toml")),
    ("level_02.toml", include_str!("../../puzzles/level_02.toml")),
    ("level_03.toml", include_str!("../../puzzles/level_03.toml")),
];

pub fn load_level(path: &Path) -> Result<Level> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let level: Level =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(level)
}

pub fn load_catalog(puzzle_dir: &Path) -> Result<Catalog> {
    // Match file names only, so the directory path itself is never read as a pattern.
    let level_file = glob::Pattern::new(LEVEL_FILE_PATTERN)?;

    let entries = std::fs::read_dir(puzzle_dir)
        .with_context(|| format!("failed to read puzzle directory {}", puzzle_dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %puzzle_dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(name = ?file_name, "skipping non-UTF-8 file name");
            continue;
        };
        if level_file.matches(name) {
            paths.push(entry.path());
        }
    }

    // level_01, level_02, ... sort into solve order
    paths.sort();

    let mut levels = Vec::with_capacity(paths.len());
    for path in &paths {
        debug!(path = %path.display(), "loading level");
        levels.push(load_level(path)?);
    }

    let catalog = Catalog::new(levels)
        .with_context(|| format!("invalid puzzle set in {}", puzzle_dir.display()))?;
    info!(levels = catalog.len(), dir = %puzzle_dir.display(), "catalog loaded");
    Ok(catalog)
}

/// The trials compiled into the binary.
pub fn builtin_catalog() -> Result<Catalog> {
    let mut levels = Vec::with_capacity(BUILTIN_LEVELS.len());
    for (name, content) in BUILTIN_LEVELS {
        let level: Level =
            toml::from_str(content).with_context(|| format!("failed to parse builtin {name}"))?;
        levels.push(level);
    }
    Ok(Catalog::new(levels)?)
}
