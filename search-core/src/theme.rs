use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: "#0f4c81".to_string(),
            secondary: "#f2a541".to_string(),
            accent: "#e4572e".to_string(),
            background: "#f7f5f0".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1d2330".to_string(),
        }
    }
}

impl ThemePalette {
    /// Inline `style` value exposing the palette as CSS custom properties.
    pub fn to_css_vars(&self) -> String {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
        ]
        .iter()
        .map(|(name, value)| format!("--color-{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Read-only site settings, built once and handed to the UI through context.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand_name: String,
    pub tagline: String,
    pub support_email: String,
    pub theme: ThemePalette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Prenoto".to_string(),
            tagline: "Ristoranti, B&B, club, NCC e deposito bagagli in un'unica ricerca".to_string(),
            support_email: "supporto@prenoto.it".to_string(),
            theme: ThemePalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_vars() {
        let css = ThemePalette::default().to_css_vars();
        assert!(css.starts_with("--color-primary: #0f4c81;"));
        assert!(css.contains("--color-text: #1d2330;"));
        assert_eq!(css.matches("--color-").count(), 6);
    }

    #[test]
    fn test_config_deserializes() {
        let raw = r##"{
            "brand_name": "Test",
            "tagline": "t",
            "support_email": "a@b.it",
            "theme": {
                "primary": "#000", "secondary": "#111", "accent": "#222",
                "background": "#333", "surface": "#444", "text": "#555"
            }
        }"##;
        let config: SiteConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.brand_name, "Test");
        assert_eq!(config.theme.surface, "#444");
    }
}
