//! Text renderings shared by the interactive views and the one-shot
//! subcommands. Nothing here prints; every function returns the block to
//! write.

use super::style;
use crate::app::View;
use crate::catalog::{BottleRecord, TarotImage};
use crate::reading::ReadingResult;
use crate::selection::{SelectionState, Slot};
use std::fmt::Write as _;
use std::path::Path;

const RULE_WIDTH: usize = 44;

fn rule() -> String {
    style::dim("─".repeat(RULE_WIDTH))
}

pub fn slot_title(slot: Slot) -> String {
    match slot {
        Slot::Soul => t!("slot.soul.title"),
        Slot::ChallengeGift => t!("slot.challenge_gift.title"),
        Slot::Present => t!("slot.present.title"),
        Slot::Future => t!("slot.future.title"),
    }
    .to_string()
}

pub fn slot_description(slot: Slot) -> String {
    match slot {
        Slot::Soul => t!("slot.soul.desc"),
        Slot::ChallengeGift => t!("slot.challenge_gift.desc"),
        Slot::Present => t!("slot.present.desc"),
        Slot::Future => t!("slot.future.desc"),
    }
    .to_string()
}

/// Brand plus the three navigation targets, the active one bracketed.
pub fn nav_bar(active: View) -> String {
    let items = [
        (View::Home, t!("nav.home")),
        (View::Gallery, t!("nav.gallery")),
        (View::Reading, t!("nav.reading")),
    ]
    .into_iter()
    .map(|(view, label)| {
        if view == active {
            style::accent(format!("[{label}]"))
        } else {
            style::dim(format!(" {label} "))
        }
    })
    .collect::<Vec<_>>()
    .join(" ");

    let brand = style::header(format!("光 {}", t!("nav.brand")));
    format!("{brand}  {items}\n{}", rule())
}

pub fn bottle_glyph(bottle: &BottleRecord) -> String {
    style::bottle_glyph(bottle.colors.top.rgb(), bottle.colors.bottom.rgb())
}

/// One list row: glyph, label and name. Used bottles are dimmed.
pub fn bottle_line(bottle: &BottleRecord, used: bool) -> String {
    let text = format!("{:<4} {}", bottle.label(), bottle.name);
    let text = if used { style::dim(text) } else { text };
    format!("{} {text}", bottle_glyph(bottle))
}

pub fn home(sample: &[&BottleRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style::header(t!("home.headline_1")));
    let _ = writeln!(out, "{}", style::value(t!("home.headline_2")));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t!("home.tagline_1"));
    let _ = writeln!(out, "{}", style::dim(t!("home.tagline_2")));
    let _ = writeln!(out);
    if !sample.is_empty() {
        let glyphs: Vec<String> = sample.iter().map(|b| bottle_glyph(b)).collect();
        let _ = writeln!(out, "  {}", glyphs.join("  "));
        let _ = writeln!(out);
    }
    let _ = write!(out, "{}", style::dim(t!("home.footer")));
    out
}

/// Search results, or the no-match notice naming the query.
pub fn gallery_list(results: &[&BottleRecord], query: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style::header(t!("gallery.title")));
    if results.is_empty() {
        let _ = write!(
            out,
            "{}",
            style::yellow(t!("gallery.no_results", query = query.trim()))
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        style::dim(t!("gallery.count", count = results.len()))
    );
    for bottle in results {
        let _ = writeln!(out, "  {}", bottle_line(bottle, false));
    }
    out.truncate(out.trim_end().len());
    out
}

/// The detail overlay for one bottle.
///
/// `image` is the resolved tarot illustration; pass `None` when the bottle
/// has no illustration configured.
pub fn bottle_detail(
    bottle: &BottleRecord,
    image: Option<&TarotImage>,
    asset_root: &Path,
) -> String {
    let mut out = String::new();
    let ext = bottle.extended();

    let _ = writeln!(
        out,
        "{} {}  {}",
        bottle_glyph(bottle),
        style::header(format!("{} {}", bottle.label(), bottle.name)),
        style::dim(bottle.display_alias())
    );
    if !bottle.tags.is_empty() {
        let _ = writeln!(out, "{}", style::dim(bottle.tags.join(" · ")));
    }
    let _ = writeln!(out, "{}", rule());

    let _ = writeln!(out, "{}", style::cyan(t!("detail.color_energy")));
    for swatch in [&bottle.colors.top, &bottle.colors.bottom] {
        let _ = writeln!(out, "  {} {}", style::swatch(swatch.rgb()), swatch.label);
    }
    if let Some(mixed) = ext.and_then(|e| e.mixed_color.as_deref()) {
        let _ = writeln!(out, "  {}: {mixed}", style::dim(t!("detail.mixed_color")));
    }

    if let Some(tarot) = ext.and_then(|e| e.tarot.as_deref()) {
        let _ = writeln!(out, "{} {tarot}", style::cyan(t!("detail.tarot_archetype")));
    }
    match image {
        Some(TarotImage::Found(path)) => {
            let _ = writeln!(
                out,
                "  {}",
                style::dim(t!("detail.tarot_image", path = path.display()))
            );
        }
        Some(TarotImage::Unavailable { attempts, .. }) => {
            let tried = attempts
                .first()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "  {}", style::yellow(t!("detail.image_failed")));
            let _ = writeln!(out, "  {}", t!("detail.image_check"));
            let _ = writeln!(out, "  {}", t!("detail.image_check_path", path = tried));
            let _ = writeln!(
                out,
                "  {}",
                t!("detail.image_check_folder", root = asset_root.display())
            );
            let _ = writeln!(out, "  {}", t!("detail.image_check_ext"));
        }
        None => {}
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}  {}", style::cyan(t!("detail.theme")), bottle.theme);
    let _ = writeln!(
        out,
        "{}  {}",
        style::cyan(t!("detail.affirmation")),
        style::value(format!("「{}」", bottle.affirmation))
    );

    if let Some(ext) = ext {
        if ext.has_personality() {
            let _ = writeln!(out);
        }
        if let Some(text) = ext.positive_personality.as_deref() {
            let _ = writeln!(out, "{}\n  {text}", style::accent(t!("detail.positive")));
        }
        if let Some(text) = ext.challenge_personality.as_deref() {
            let _ = writeln!(out, "{}\n  {text}", style::accent(t!("detail.challenge")));
        }

        if ext.has_levels() {
            let _ = writeln!(out);
        }
        let levels = [
            (t!("detail.spiritual"), ext.spiritual_level.as_deref()),
            (t!("detail.mental"), ext.mental_level.as_deref()),
            (t!("detail.emotional"), ext.emotional_level.as_deref()),
            (t!("detail.physical"), ext.physical_level.as_deref()),
        ];
        for (label, text) in levels {
            if let Some(text) = text {
                let _ = writeln!(out, "{}  {text}", style::cyan(label));
            }
        }

        if let Some(text) = ext.where_to_apply.as_deref() {
            let _ = writeln!(out);
            let label = style::accent(t!("detail.where_to_apply"));
            let _ = writeln!(out, "{label}\n  {text}");
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// The four positions with their bottles; the cursor slot is marked `›`.
pub fn slot_board(selection: &SelectionState<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style::header(t!("reading.title")));
    let _ = writeln!(out, "{}", style::dim(t!("reading.hint")));
    for (slot, bottle) in selection.iter() {
        let marker = if slot == selection.active() { "›" } else { " " };
        let content = bottle.map_or_else(
            || style::dim(t!("reading.empty_slot")),
            |b| bottle_line(b, false),
        );
        let _ = writeln!(
            out,
            "{} {} {:<10} {content}",
            style::accent(marker),
            style::accent(slot),
            slot_title(slot)
        );
    }
    let _ = write!(out, "{}", selection_status(selection));
    out
}

/// The line under the board: which slot the next pick fills, or that the
/// board is ready.
pub fn selection_status(selection: &SelectionState<'_>) -> String {
    if selection.is_complete() {
        return style::value(t!("reading.ready"));
    }
    let active = selection.active();
    let status = t!("reading.status", slot = active, title = slot_title(active));
    format!(
        "{}\n{}",
        style::cyan(status),
        style::dim(slot_description(active))
    )
}

/// The finished reading: introduction, one block per position with its
/// bottle, and the closing blessing.
pub fn reading_result(selection: &SelectionState<'_>, reading: &ReadingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style::header(t!("result.title")));
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", reading.introduction);

    for (slot, text) in reading.positions.iter() {
        let _ = writeln!(out);
        let bottle = selection
            .get(slot)
            .map(|b| {
                let name = style::value(format!("{} {}", b.label(), b.name));
                format!("{} {name}", bottle_glyph(b))
            })
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} {}  {bottle}",
            style::accent(t!("result.position", slot = slot)),
            style::cyan(slot_title(slot))
        );
        let _ = writeln!(out, "  {text}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", style::cyan(t!("result.summary")));
    let _ = write!(out, "{}", style::value(&reading.summary));
    out
}
