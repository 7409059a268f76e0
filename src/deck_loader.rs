//! Deck discovery and the deck text format.
//!
//! A deck file is plain text:
//!
//! ```text
//! # Rust in Production          deck title (optional, first `#` line wins)
//!
//! ## Why Rust                   slide heading
//! Memory safety without GC
//! + Fearless concurrency        step block, revealed on advance
//! +[highlight] Zero-cost        step block with a named style
//! ---                           slide separator
//! Next slide...
//! ```
//!
//! Step styles are `highlight`, `dim` and `big`; anything else falls back to
//! the default reveal style.

use crate::deck::{Block, Deck, Slide, StepStyle};
use crate::errors::{PresenterError, Result};

use anyhow::Context as _;
use std::path::{Path, PathBuf};

pub const DECK_EXTENSIONS: &[&str] = &["deck", "slides"];

pub fn is_deck_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| DECK_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects all deck files in a folder, natural-sorted by file name.
/// Malformed decks are skipped with a warning; an unreadable folder is an
/// error.
pub fn load_folder(folder: &Path, include_subfolders: bool) -> anyhow::Result<Vec<Deck>> {
    let mut files: Vec<PathBuf> = if include_subfolders {
        walkdir::WalkDir::new(folder)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| is_deck_file(path))
            .collect()
    } else {
        std::fs::read_dir(folder)
            .with_context(|| format!("reading deck folder {}", folder.display()))?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_deck_file(path))
            .collect()
    };

    files.sort_by(|a, b| {
        natord::compare(
            &a.to_string_lossy().to_lowercase(),
            &b.to_string_lossy().to_lowercase(),
        )
    });

    let mut decks = Vec::new();
    for path in files {
        match load_deck(&path) {
            Ok(deck) => decks.push(deck),
            Err(err) => log::warn!("Skipping {}: {}", path.display(), err),
        }
    }
    Ok(decks)
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    let text = std::fs::read_to_string(path).map_err(|source| PresenterError::DeckRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_deck(path, &text)
}

pub fn parse_deck(path: &Path, text: &str) -> Result<Deck> {
    let mut title: Option<String> = None;
    let mut slides: Vec<Slide> = Vec::new();
    let mut heading: Option<String> = None;
    let mut blocks: Vec<Block> = Vec::new();

    let finish_slide =
        |heading: &mut Option<String>, blocks: &mut Vec<Block>, slides: &mut Vec<Slide>| {
            if heading.is_none() && blocks.is_empty() {
                return Err(PresenterError::MissingSource {
                    context: format!(
                        "slide {} of '{}' is empty",
                        slides.len() + 1,
                        path.display()
                    ),
                });
            }
            slides.push(Slide::new(heading.take(), std::mem::take(blocks)));
            Ok(())
        };

    for raw in text.lines() {
        let line = raw.trim_end();
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            continue;
        }
        if is_separator(trimmed) {
            // A separator before any content (right after the title line) is
            // cosmetic, not an empty slide
            if slides.is_empty() && heading.is_none() && blocks.is_empty() {
                continue;
            }
            finish_slide(&mut heading, &mut blocks, &mut slides)?;
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("## ") {
            if heading.is_none() {
                heading = Some(rest.trim().to_string());
                continue;
            }
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            if title.is_none() {
                title = Some(rest.trim().to_string());
                continue;
            }
        }
        if let Some(rest) = trimmed.strip_prefix('+') {
            blocks.push(parse_step(rest));
            continue;
        }
        blocks.push(Block::fixed(trimmed));
    }
    // A trailing separator leaves nothing accumulated; that is not an empty
    // slide as long as the deck already has one
    if slides.is_empty() || heading.is_some() || !blocks.is_empty() {
        finish_slide(&mut heading, &mut blocks, &mut slides)?;
    }

    Ok(Deck::new(path.to_path_buf(), title, slides))
}

fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// `rest` is a step line with the leading `+` already stripped. An optional
/// `[name]` right after the `+` selects the step style.
fn parse_step(rest: &str) -> Block {
    if let Some(tail) = rest.strip_prefix('[') {
        if let Some((name, text)) = tail.split_once(']') {
            return Block::step(text.trim_start(), StepStyle::from_name(name.trim()));
        }
    }
    Block::step(rest.trim_start(), StepStyle::default())
}
