use super::{App, View, describe_bottle};
use crate::llm::TextGenerator;
use crate::ui::render;
use anyhow::Result;
use dialoguer::{FuzzySelect, Input};

fn prompt_query() -> Result<String> {
    let query = Input::<String>::new()
        .with_prompt(t!("gallery.search_prompt"))
        .allow_empty(true)
        .interact_text()?;
    Ok(query)
}

pub(super) fn show<G: TextGenerator>(
    app: &App<'_, G>,
    initial: Option<String>,
) -> Result<Option<View>> {
    let mut query = match initial {
        Some(query) => query,
        None => prompt_query()?,
    };

    loop {
        let results = app.catalog.search(&query);
        tracing::debug!(query = %query, matches = results.len(), "catalog search");
        println!("{}\n", render::gallery_list(&results, &query));

        // Plain labels keep fuzzy matching on the visible text.
        let mut items: Vec<String> = results
            .iter()
            .map(|b| format!("{} {}", b.label(), b.name))
            .collect();
        items.push(format!("› {}", t!("gallery.new_search")));
        items.push(format!("› {}", t!("gallery.to_reading")));
        items.push(format!("› {}", t!("gallery.back_home")));

        let picked = FuzzySelect::new()
            .with_prompt(t!("gallery.pick_bottle"))
            .items(&items)
            .default(0)
            .interact()?;

        if let Some(bottle) = results.get(picked) {
            println!("\n{}\n", describe_bottle(bottle, &app.asset_root));
            continue;
        }

        match picked - results.len() {
            0 => query = prompt_query()?,
            1 => return Ok(Some(View::Reading)),
            _ => return Ok(Some(View::Home)),
        }
    }
}
