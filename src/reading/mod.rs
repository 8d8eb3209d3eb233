//! Turning a four-bottle selection into a narrative reading.

mod fallback;
mod flow;
mod prompt;
mod service;

pub use fallback::fallback_reading;
pub use flow::ReadingFlow;
pub use prompt::build_prompt;
pub use service::{ReadingService, parse_reading};

use crate::error::ReadingError;
use crate::selection::Slot;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A generated (or fallback) reading for one complete selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingResult {
    pub introduction: String,
    pub positions: ReadingPositions,
    pub summary: String,
}

/// Interpretation text per slot, keyed `"1"`..`"4"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPositions {
    #[serde(rename = "1")]
    pub soul: String,
    #[serde(rename = "2")]
    pub challenge_gift: String,
    #[serde(rename = "3")]
    pub present: String,
    #[serde(rename = "4")]
    pub future: String,
}

impl ReadingPositions {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Soul => &self.soul,
            Slot::ChallengeGift => &self.challenge_gift,
            Slot::Present => &self.present,
            Slot::Future => &self.future,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::all().map(|slot| (slot, self.get(slot)))
    }
}

impl ReadingResult {
    pub fn position(&self, slot: Slot) -> &str {
        self.positions.get(slot)
    }

    /// Reject readings with any blank section.
    pub(crate) fn ensure_complete(&self) -> Result<(), ReadingError> {
        if self.introduction.trim().is_empty() {
            return Err(ReadingError::BlankField("introduction"));
        }
        for (slot, text) in self.positions.iter() {
            if text.trim().is_empty() {
                return Err(ReadingError::BlankField(match slot {
                    Slot::Soul => "positions.1",
                    Slot::ChallengeGift => "positions.2",
                    Slot::Present => "positions.3",
                    Slot::Future => "positions.4",
                }));
            }
        }
        if self.summary.trim().is_empty() {
            return Err(ReadingError::BlankField("summary"));
        }
        Ok(())
    }
}

/// Output schema sent with every request, in Gemini's OpenAPI subset.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "introduction": { "type": "STRING" },
            "positions": {
                "type": "OBJECT",
                "properties": {
                    "1": { "type": "STRING" },
                    "2": { "type": "STRING" },
                    "3": { "type": "STRING" },
                    "4": { "type": "STRING" }
                },
                "required": ["1", "2", "3", "4"]
            },
            "summary": { "type": "STRING" }
        },
        "required": ["introduction", "positions", "summary"]
    })
}
