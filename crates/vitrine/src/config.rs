//! Site configuration.
//!
//! One TOML document configures the whole page. Every table is optional:
//!
//! ```toml
//! theme = "dark"
//! carousel_gap = 32.0
//!
//! [typing]
//! words = ["Data Analyst", "Data Scientist"]
//!
//! [background]
//! density_divisor = 26000
//!
//! [[projects]]
//! title = "Sales Dashboard"
//! tags = ["Power BI", "SQL"]
//! metrics = ["15+ users"]
//! ```

use serde::{Deserialize, Serialize};
use vitrine_background::BackgroundConfig;
use vitrine_ui::ThemeMode;

use crate::error::{SiteError, SiteResult};
use crate::projects::Project;

/// Typing effect timing and words. Delays are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Words to cycle through.
    pub words: Vec<String>,
    /// Delay after typing one character.
    pub type_delay_ms: u32,
    /// Delay after deleting one character.
    pub delete_delay_ms: u32,
    /// Pause once a word is complete.
    pub word_pause_ms: u32,
    /// Pause once a word is fully deleted.
    pub next_word_pause_ms: u32,
}

impl TypingConfig {
    /// Stock words.
    pub const DEFAULT_WORDS: [&'static str; 4] =
        ["Data Analyst", "Data Scientist", "Python Developer", "SQL Expert"];
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            words: Self::DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            type_delay_ms: 110,
            delete_delay_ms: 60,
            word_pause_ms: 1800,
            next_word_pause_ms: 400,
        }
    }
}

/// Everything the page needs to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Theme used when no preference is saved.
    pub theme: ThemeMode,
    /// Hero typing effect.
    pub typing: TypingConfig,
    /// Project catalog, in carousel order.
    pub projects: Vec<Project>,
    /// Gap between carousel cards in pixels.
    pub carousel_gap: f32,
    /// Visible ratio at which a carousel card becomes current.
    pub carousel_threshold: f32,
    /// Scroll offset past which the navbar is `scrolled`.
    pub navbar_threshold: f32,
    /// Visible ratio at which a reveal element is shown.
    pub reveal_threshold: f32,
    /// Background glyph field.
    pub background: BackgroundConfig,
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Parse`] for malformed TOML and the validation
    /// errors of [`SiteConfig::validate`].
    pub fn from_toml_str(text: &str) -> SiteResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| SiteError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            theme = %config.theme,
            words = config.typing.words.len(),
            projects = config.projects.len(),
            "site config loaded"
        );
        Ok(config)
    }

    /// Checks every table.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> SiteResult<()> {
        self.background.validate()?;

        if self.typing.words.is_empty() {
            return Err(SiteError::NoTypingWords);
        }
        if let Some(index) = self.typing.words.iter().position(String::is_empty) {
            return Err(SiteError::EmptyTypingWord(index));
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(SiteError::InvalidProject {
                    index,
                    reason: "title is empty".to_string(),
                });
            }
        }

        if !(self.carousel_gap.is_finite() && self.carousel_gap >= 0.0) {
            return Err(SiteError::InvalidConfig(format!(
                "carousel_gap must be a non-negative number, got {}",
                self.carousel_gap
            )));
        }
        if !self.navbar_threshold.is_finite() {
            return Err(SiteError::InvalidConfig(
                "navbar_threshold must be finite".to_string(),
            ));
        }
        for (name, ratio) in [
            ("carousel_threshold", self.carousel_threshold),
            ("reveal_threshold", self.reveal_threshold),
        ] {
            if !(ratio > 0.0 && ratio <= 1.0) {
                return Err(SiteError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {ratio}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            typing: TypingConfig::default(),
            projects: Project::defaults(),
            carousel_gap: 32.0,
            carousel_threshold: 0.6,
            navbar_threshold: 20.0,
            reveal_threshold: 0.1,
            background: BackgroundConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_background::BackgroundError;

    #[test]
    fn test_empty_document_is_default_site() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.typing.words[0], "Data Analyst");
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_toml_str(
            r#"
            theme = "light"
            navbar_threshold = 64.0

            [typing]
            words = ["Rustacean"]

            [background]
            density_divisor = 52000

            [[projects]]
            title = "Churn Model"
            tags = ["Python"]
            metrics = ["0.91 AUC"]
            "#,
        )
        .expect("valid config");

        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.typing.words, vec!["Rustacean".to_string()]);
        assert_eq!(config.typing.type_delay_ms, 110);
        assert_eq!(config.background.density_divisor, 52_000);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].repo, "#");
        assert!((config.navbar_threshold - 64.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            SiteConfig::from_toml_str("theme = \"sepia\""),
            Err(SiteError::Parse(_))
        ));
        assert_eq!(
            SiteConfig::from_toml_str("[typing]\nwords = []"),
            Err(SiteError::NoTypingWords)
        );
        assert_eq!(
            SiteConfig::from_toml_str("[typing]\nwords = [\"a\", \"\"]"),
            Err(SiteError::EmptyTypingWord(1))
        );
        assert_eq!(
            SiteConfig::from_toml_str("[background]\ndensity_divisor = 0"),
            Err(SiteError::Background(BackgroundError::InvalidConfig(
                "density_divisor must be positive".to_string()
            )))
        );
        assert!(matches!(
            SiteConfig::from_toml_str("reveal_threshold = 0.0"),
            Err(SiteError::InvalidConfig(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[[projects]]\ntitle = \" \""),
            Err(SiteError::InvalidProject { index: 0, .. })
        ));
    }
}
