use super::Config;

/// Locales with a translation file under `locales/`.
const SUPPORTED: [&str; 2] = ["zh", "en"];
const DEFAULT_LOCALE: &str = "zh";

fn detect_system_locale() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty() && lang != "c" && lang != "posix")
}

/// Detect locale: `--locale` flag -> `HIKARI_LANG` env -> config value ->
/// system `LANG` -> `"zh"`.
///
/// Unsupported languages fall through to the next source.
fn detect_locale(explicit: Option<&str>, config_locale: &str) -> String {
    let candidates = [
        explicit.map(str::to_string),
        std::env::var("HIKARI_LANG").ok(),
        Some(config_locale.to_string()),
        detect_system_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .map(|raw| normalise_locale(&raw.trim().to_lowercase()))
        .find(|lang| SUPPORTED.contains(&lang.as_str()))
        .unwrap_or_else(|| DEFAULT_LOCALE.into())
}

/// Normalise `"zh_TW.UTF-8"` -> `"zh"`, `"en-US"` -> `"en"`, passthrough `"zh"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.to_string()
}

impl Config {
    /// Detect locale from flag -> env -> config -> system, then set
    /// `rust_i18n::set_locale`.
    pub fn apply_locale(&self, explicit: Option<&str>) {
        let locale = detect_locale(explicit, &self.locale);
        tracing::debug!(%locale, "ui locale selected");
        rust_i18n::set_locale(&locale);
    }
}
