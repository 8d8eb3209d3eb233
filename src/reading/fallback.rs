use super::{ReadingPositions, ReadingResult};

const INTRODUCTION: &str = "連結宇宙的色彩能量，我們為您帶來當下的指引...";
const SOUL: &str = "這個位置代表您的靈魂本質。您選擇的瓶子顯示出您擁有深層的內在智慧。";
const CHALLENGE_GIFT: &str =
    "挑戰即是禮物。您可能正在學習如何平衡您的能量，這將轉化為巨大的力量。";
const PRESENT: &str = "在此時此刻，您正處於一個轉變的階段，色彩顯示出平靜中的活力。";
const FUTURE: &str = "未來充滿了可能性，持續保持覺知，您將吸引對應的豐盛。";
const SUMMARY: &str = "相信您的直覺，色彩是靈魂的語言。";

/// The fixed reading shown whenever generation fails.
pub fn fallback_reading() -> ReadingResult {
    ReadingResult {
        introduction: INTRODUCTION.to_string(),
        positions: ReadingPositions {
            soul: SOUL.to_string(),
            challenge_gift: CHALLENGE_GIFT.to_string(),
            present: PRESENT.to_string(),
            future: FUTURE.to_string(),
        },
        summary: SUMMARY.to_string(),
    }
}
