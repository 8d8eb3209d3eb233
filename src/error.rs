use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `hikari`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these; the binary wraps them in `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum HikariError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Catalog ──────────────────────────────────────────────────────────
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Reading ─────────────────────────────────────────────────────────
    #[error("reading: {0}")]
    Reading(#[from] ReadingError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Catalog errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog contains no bottles")]
    Empty,

    #[error("duplicate bottle id {0:?}")]
    DuplicateId(String),

    #[error("duplicate bottle number {0}")]
    DuplicateNumber(u32),

    #[error("bottle {id:?} has invalid colour {value:?}")]
    InvalidColor { id: String, value: String },

    #[error("no bottle matches {0:?}")]
    UnknownBottle(String),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{provider} API key not set")]
    MissingApiKey { provider: &'static str },

    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error ({status}): {message}")]
    Status {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    #[error("no response text from {provider}")]
    EmptyResponse { provider: &'static str },
}

// ─── Reading errors ─────────────────────────────────────────────────────────

/// Why a generated reading could not be used.
///
/// Never escapes the reading service; every variant collapses to the
/// fallback reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error(transparent)]
    Generation(#[from] LlmError),

    #[error("malformed reading payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("reading field {0:?} is blank")]
    BlankField(&'static str),
}

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, HikariError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_error_converts_into_reading_error() {
        let err: ReadingError = LlmError::EmptyResponse { provider: "Gemini" }.into();
        assert!(matches!(err, ReadingError::Generation(_)));
        assert_eq!(err.to_string(), "no response text from Gemini");
    }

    #[test]
    fn catalog_error_is_prefixed_at_top_level() {
        let err: HikariError = CatalogError::DuplicateNumber(5).into();
        assert_eq!(err.to_string(), "catalog: duplicate bottle number 5");
    }

    #[test]
    fn status_error_reports_code_and_message() {
        let err = LlmError::Status {
            provider: "Gemini",
            status: 500,
            message: "internal".into(),
        };
        assert_eq!(err.to_string(), "Gemini API error (500): internal");
    }
}
