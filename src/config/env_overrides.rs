use super::Config;

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_var("HIKARI_API_KEY")
            .or_else(|| non_empty_var("GEMINI_API_KEY"))
            .or_else(|| non_empty_var("API_KEY"))
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("HIKARI_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }

        if let Ok(base_url) = std::env::var("HIKARI_API_BASE_URL")
            && !base_url.is_empty()
        {
            self.api_base_url = base_url;
        }

        if let Ok(path) = std::env::var("HIKARI_CATALOG")
            && !path.is_empty()
        {
            self.catalog.path = Some(path);
        }

        if let Ok(root) = std::env::var("HIKARI_ASSETS")
            && !root.is_empty()
        {
            self.catalog.asset_root = Some(root);
        }

        if let Ok(temp_str) = std::env::var("HIKARI_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.temperature = Some(temp);
        }
    }
}
