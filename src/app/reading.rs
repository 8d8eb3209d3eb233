use super::{App, View};
use crate::catalog::{BottleRecord, Catalog};
use crate::llm::TextGenerator;
use crate::reading::ReadingFlow;
use crate::selection::{SelectionState, Slot};
use crate::ui::{render, style};
use anyhow::Result;
use dialoguer::{FuzzySelect, Select};

/// One entry of the reading screen's picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingAction<'a> {
    Start,
    Pick(&'a BottleRecord),
    Focus,
    Clear,
    Reset,
    Home,
}

/// Entries offered for `selection`: "start" once complete, every bottle not
/// already placed, then the slot actions.
pub fn reading_menu<'a>(
    catalog: &'a Catalog,
    selection: &SelectionState<'a>,
) -> Vec<ReadingAction<'a>> {
    let mut menu = Vec::with_capacity(catalog.len() + 5);
    if selection.is_complete() {
        menu.push(ReadingAction::Start);
    }
    menu.extend(
        catalog
            .bottles()
            .iter()
            .filter(|bottle| !selection.contains(bottle))
            .map(ReadingAction::Pick),
    );
    menu.push(ReadingAction::Focus);
    if selection.filled_count() > 0 {
        menu.push(ReadingAction::Clear);
        menu.push(ReadingAction::Reset);
    }
    menu.push(ReadingAction::Home);
    menu
}

fn action_label(action: ReadingAction<'_>) -> String {
    match action {
        ReadingAction::Start => t!("reading.start").to_string(),
        ReadingAction::Pick(bottle) => format!("{} {}", bottle.label(), bottle.name),
        ReadingAction::Focus => format!("› {}", t!("reading.choose_slot")),
        ReadingAction::Clear => format!("› {}", t!("reading.clear_slot")),
        ReadingAction::Reset => format!("› {}", t!("reading.reset")),
        ReadingAction::Home => format!("› {}", t!("reading.back_home")),
    }
}

/// Ask for a slot; with `filled_only` only occupied slots are offered.
fn prompt_slot(selection: &SelectionState<'_>, filled_only: bool) -> Result<Option<Slot>> {
    let slots: Vec<Slot> = selection
        .iter()
        .filter(|(_, bottle)| !filled_only || bottle.is_some())
        .map(|(slot, _)| slot)
        .collect();
    let labels: Vec<String> = slots
        .iter()
        .map(|slot| format!("{slot}. {}", render::slot_title(*slot)))
        .collect();

    let picked = Select::new()
        .with_prompt(t!("reading.slot_prompt"))
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(picked.and_then(|index| slots.get(index).copied()))
}

/// Returns after the result screen's menu or "back home".
fn result_menu(flow: &mut ReadingFlow<'_>) -> Result<Option<View>> {
    let choices = [
        t!("result.new_reading"),
        t!("result.to_gallery"),
        t!("result.back_home"),
    ];
    let picked = Select::new()
        .with_prompt(t!("result.menu_prompt"))
        .items(&choices)
        .default(0)
        .interact()?;

    Ok(match picked {
        0 => {
            flow.reset();
            None
        }
        1 => Some(View::Gallery),
        _ => Some(View::Home),
    })
}

pub(super) async fn show<G: TextGenerator>(app: &App<'_, G>) -> Result<Option<View>> {
    let mut flow = ReadingFlow::new();

    loop {
        if let Some(reading) = flow.result() {
            println!("\n{}\n", render::reading_result(flow.selection(), reading));
            if let Some(next) = result_menu(&mut flow)? {
                return Ok(Some(next));
            }
            continue;
        }

        println!("\n{}\n", render::slot_board(flow.selection()));
        let menu = reading_menu(app.catalog, flow.selection());
        let labels: Vec<String> = menu.iter().map(|action| action_label(*action)).collect();
        let picked = FuzzySelect::new()
            .with_prompt(t!("reading.menu_prompt"))
            .items(&labels)
            .default(0)
            .interact()?;
        let Some(action) = menu.get(picked).copied() else {
            continue;
        };

        match action {
            ReadingAction::Start => {
                println!("{}", style::dim(t!("reading.analyzing")));
                flow.request(&app.service).await;
            }
            ReadingAction::Pick(bottle) => {
                let slot = flow.pick(bottle);
                tracing::debug!(bottle = %bottle.label(), %slot, "bottle placed");
            }
            ReadingAction::Focus => {
                if let Some(slot) = prompt_slot(flow.selection(), false)? {
                    flow.focus(slot);
                }
            }
            ReadingAction::Clear => {
                if let Some(slot) = prompt_slot(flow.selection(), true)? {
                    flow.clear_slot(slot);
                }
            }
            ReadingAction::Reset => flow.reset(),
            ReadingAction::Home => return Ok(Some(View::Home)),
        }
    }
}
