use super::{ReadingResult, build_prompt, fallback_reading, response_schema};
use crate::error::ReadingError;
use crate::llm::TextGenerator;
use crate::selection::SelectionState;
use serde_json::Value;

/// Requests readings from a [`TextGenerator`], degrading to the fixed
/// fallback reading on any failure.
pub struct ReadingService<G> {
    generator: G,
    schema: Value,
}

impl<G: TextGenerator> ReadingService<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            schema: response_schema(),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Produce a reading for `selection`. Never fails: transport errors,
    /// error statuses, empty payloads and malformed JSON all yield
    /// [`fallback_reading`].
    ///
    /// Completeness is the caller's responsibility (see
    /// [`SelectionState::is_complete`]).
    pub async fn request_reading(&self, selection: &SelectionState<'_>) -> ReadingResult {
        match self.try_request(selection).await {
            Ok(reading) => {
                tracing::info!(provider = self.generator.name(), "reading generated");
                reading
            }
            Err(err) => {
                tracing::warn!(
                    provider = self.generator.name(),
                    error = %err,
                    "reading request failed; using fallback reading"
                );
                fallback_reading()
            }
        }
    }

    async fn try_request(
        &self,
        selection: &SelectionState<'_>,
    ) -> Result<ReadingResult, ReadingError> {
        let prompt = build_prompt(selection);
        let raw = self.generator.generate_json(&prompt, &self.schema).await?;
        parse_reading(&raw)
    }
}

/// Parse a provider payload into a complete reading.
pub fn parse_reading(raw: &str) -> Result<ReadingResult, ReadingError> {
    let reading: ReadingResult = serde_json::from_str(raw.trim())?;
    reading.ensure_complete()?;
    Ok(reading)
}
