use crate::catalog::BottleRecord;
use crate::selection::SelectionState;
use std::fmt::Write;

const PERSONA: &str = "你是一位資深的 Aura-Soma 色彩諮詢師，語氣溫柔、清新、充滿療癒感與洞見。\n\
請根據以下使用者選擇的四個瓶子進行解讀。";

const INSTRUCTIONS: &str = "請用繁體中文回答，結構如下：\n\
1. 引言：簡短歡迎與整體感覺。\n\
2. 針對每一個位置（1: 靈魂瓶, 2: 挑戰與禮物, 3: 當下, 4: 未來）進行深入淺出的解讀，結合色彩心理學與瓶子的含義。\n\
3. 總結：給予一句充滿力量的建議或祝福。\n\n\
請確保語氣是支持性的、正向的，並且不要過於宿命論，強調使用者的自由意志與覺察。";

/// Build the generation prompt for `selection`.
///
/// Empty slots are not rejected here; they appear as a bare `Position N:`
/// line.
pub fn build_prompt(selection: &SelectionState<'_>) -> String {
    let mut details = String::new();
    for (slot, bottle) in selection.iter() {
        let _ = write!(details, "\nPosition {slot}: ");
        match bottle {
            Some(bottle) => describe_bottle(&mut details, bottle),
            None => details.push('\n'),
        }
    }

    format!("{PERSONA}\n\n選擇的瓶子詳細資訊如下：\n{details}\n{INSTRUCTIONS}\n")
}

fn describe_bottle(out: &mut String, bottle: &BottleRecord) {
    let _ = writeln!(out, "Bottle #{} ({})", bottle.number, bottle.name);
    let _ = writeln!(
        out,
        "- Colors: {} / {}",
        bottle.colors.top.label, bottle.colors.bottom.label
    );
    let _ = writeln!(out, "- Theme: {}", bottle.theme);

    let Some(ext) = bottle.extended() else {
        return;
    };
    if let Some(text) = &ext.positive_personality {
        let _ = writeln!(out, "- Positive Personality: {text}");
    }
    if let Some(text) = &ext.challenge_personality {
        let _ = writeln!(out, "- Challenge: {text}");
    }
    if let Some(text) = &ext.spiritual_level {
        let _ = writeln!(out, "- Spiritual: {text}");
    }
}
