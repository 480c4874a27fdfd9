use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "en-GB")]
    EnglishUk,
    #[serde(rename = "de-DE")]
    German,
    #[serde(rename = "es-ES")]
    Spanish,
    #[serde(rename = "fr-FR")]
    French,
}

impl Language {
    pub const ALL: &[Language] = &[
        Language::EnglishUs,
        Language::EnglishUk,
        Language::German,
        Language::Spanish,
        Language::French,
    ];

    /// BCP-47 tag handed to the recognition capability.
    pub fn tag(self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US",
            Language::EnglishUk => "en-GB",
            Language::German => "de-DE",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::EnglishUs => write!(f, "English (US)"),
            Language::EnglishUk => write!(f, "English (UK)"),
            Language::German => write!(f, "German"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "System"),
            Appearance::Dark => write!(f, "Dark"),
            Appearance::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub appearance: Appearance,
    pub high_contrast: bool,
    pub font_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::EnglishUs,
            appearance: Appearance::System,
            high_contrast: false,
            font_scale: 1.0,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Voxpad").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(path, json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_recognizer_setup() {
        let settings = Settings::default();
        assert_eq!(settings.language.tag(), "en-US");
        assert_eq!(settings.appearance, Appearance::System);
        assert!(!settings.high_contrast);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            language: Language::German,
            appearance: Appearance::Dark,
            high_contrast: true,
            font_scale: 1.2,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"de-DE\""));

        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Language::German);
        assert_eq!(back.appearance, Appearance::Dark);
        assert!(back.high_contrast);
    }

    #[test]
    fn unknown_json_falls_back_to_defaults_on_load_path() {
        let parsed: Result<Settings, _> = serde_json::from_str("{\"language\": \"xx\"}");
        assert!(parsed.is_err());
    }
}
