use super::{App, View};
use crate::catalog::BottleRecord;
use crate::llm::TextGenerator;
use crate::ui::render;
use anyhow::Result;
use dialoguer::Select;
use rand::seq::IndexedRandom;

const SAMPLE_SIZE: usize = 5;

/// Up to five distinct bottles for the landing page.
fn sample(bottles: &[BottleRecord]) -> Vec<&BottleRecord> {
    let mut rng = rand::rng();
    bottles.choose_multiple(&mut rng, SAMPLE_SIZE).collect()
}

pub(super) fn show<G: TextGenerator>(app: &App<'_, G>) -> Result<Option<View>> {
    println!("{}\n", render::home(&sample(app.catalog.bottles())));

    let choices = [
        t!("home.start_reading"),
        t!("home.browse"),
        t!("home.quit"),
    ];
    let picked = Select::new()
        .with_prompt(t!("home.menu_prompt"))
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(match picked {
        0 => Some(View::Reading),
        1 => Some(View::Gallery),
        _ => None,
    })
}
