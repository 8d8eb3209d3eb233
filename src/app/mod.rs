//! The three interactive screens and the loop that moves between them.
//!
//! Each screen runs its own prompt loop and returns the next [`View`], or
//! `None` when the user quits.

mod gallery;
mod home;
mod reading;

pub use reading::{ReadingAction, reading_menu};

use crate::catalog::{BottleRecord, Catalog, resolve_tarot_image};
use crate::llm::TextGenerator;
use crate::reading::ReadingService;
use crate::ui::render;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Gallery,
    Reading,
}

pub struct App<'a, G> {
    catalog: &'a Catalog,
    service: ReadingService<G>,
    asset_root: PathBuf,
}

impl<'a, G: TextGenerator> App<'a, G> {
    pub fn new(catalog: &'a Catalog, service: ReadingService<G>, asset_root: PathBuf) -> Self {
        Self {
            catalog,
            service,
            asset_root,
        }
    }

    /// Run screens starting at `start` until the user quits.
    ///
    /// `query` seeds the first gallery search.
    pub async fn run(&self, start: View, query: Option<String>) -> Result<()> {
        let mut query = query;
        let mut next = Some(start);

        while let Some(view) = next {
            println!("\n{}\n", render::nav_bar(view));
            next = match view {
                View::Home => home::show(self)?,
                View::Gallery => gallery::show(self, query.take())?,
                View::Reading => reading::show(self).await?,
            };
            tracing::debug!(from = ?view, to = ?next, "view transition");
        }

        Ok(())
    }
}

/// Detail overlay for `bottle` with its tarot illustration resolved against
/// `asset_root`.
pub fn describe_bottle(bottle: &BottleRecord, asset_root: &Path) -> String {
    let image = bottle
        .tarot_image()
        .map(|path| resolve_tarot_image(asset_root, path));
    render::bottle_detail(bottle, image.as_ref(), asset_root)
}
