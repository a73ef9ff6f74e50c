//! Background configuration.
//!
//! Every knob has a default equal to the reference look, so an empty TOML
//! table (or no table at all) gives the stock background:
//!
//! ```toml
//! density_divisor = 26000
//! rotation_step = 0.0008
//! size = { min = 11.0, max = 23.0 }
//! glyphs = ["∞", "F=ma", "∮F·ds"]
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BackgroundError, BackgroundResult};

/// Half-open random range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Inclusive lower bound.
    pub min: f32,
    /// Exclusive upper bound.
    pub max: f32,
}

impl Bounds {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draws a value uniformly from the range. A collapsed range yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    /// Returns true if `value` lies in `[min, max)`.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    fn validate(&self, name: &'static str) -> BackgroundResult<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(BackgroundError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Non-empty list of glyph labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GlyphCatalog(Vec<String>);

impl GlyphCatalog {
    /// The stock set of math and statistics notation.
    pub const DEFAULT_GLYPHS: [&'static str; 24] = [
        "e^{iπ}+1=0", "f(x)=∫g(t)dt", "∇²φ=ρ/ε₀", "lim_{x→∞}", "Σaₙxⁿ",
        "∂f/∂x", "P(A|B)", "μ=Σx/n", "σ²=Var(X)", "z=R+jX", "F=ma",
        "y=mx+b", "det(A)", "E[X]", "χ²", "R²", "∞", "√(x²+y²)",
        "β₀+β₁x", "log₂(n)", "∀x∈ℝ", "∃ε>0", "∬f dA", "∮F·ds",
    ];

    /// Creates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::EmptyCatalog`] if `glyphs` is empty.
    pub fn new(glyphs: Vec<String>) -> BackgroundResult<Self> {
        if glyphs.is_empty() {
            return Err(BackgroundError::EmptyCatalog);
        }
        Ok(Self(glyphs))
    }

    /// Picks a label uniformly.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `label` is in the catalog.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|glyph| glyph == label)
    }

    /// Iterates the labels.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self(Self::DEFAULT_GLYPHS.iter().map(|g| (*g).to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for GlyphCatalog {
    type Error = BackgroundError;

    fn try_from(glyphs: Vec<String>) -> BackgroundResult<Self> {
        Self::new(glyphs)
    }
}

impl From<GlyphCatalog> for Vec<String> {
    fn from(catalog: GlyphCatalog) -> Self {
        catalog.0
    }
}

/// Tunables for the particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Element id of the canvas.
    pub canvas_id: String,
    /// One particle per this many square pixels.
    pub density_divisor: u32,
    /// Glyph font size in pixels.
    pub size: Bounds,
    /// Glyph alpha.
    pub opacity: Bounds,
    /// Upward drift per frame in pixels.
    pub speed: Bounds,
    /// Rotation added per frame in radians.
    pub rotation_step: f32,
    /// Respawned particles start this far below the bottom edge.
    pub respawn_offset: f32,
    /// Particles above this y are respawned.
    pub exit_line: f32,
    /// CSS font family for the glyphs.
    pub font_family: String,
    /// Labels to draw.
    pub glyphs: GlyphCatalog,
}

impl BackgroundConfig {
    /// Default canvas element id.
    pub const DEFAULT_CANVAS_ID: &'static str = "mathCanvas";
    /// Default density divisor.
    pub const DEFAULT_DENSITY_DIVISOR: u32 = 26_000;
    /// Default rotation per frame.
    pub const DEFAULT_ROTATION_STEP: f32 = 0.0008;

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::Parse`] for malformed TOML and the
    /// validation errors of [`BackgroundConfig::validate`].
    pub fn from_toml_str(text: &str) -> BackgroundResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| BackgroundError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            glyphs = config.glyphs.len(),
            density_divisor = config.density_divisor,
            "background config loaded"
        );
        Ok(config)
    }

    /// Checks every range and constant.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> BackgroundResult<()> {
        if self.density_divisor == 0 {
            return Err(BackgroundError::InvalidConfig(
                "density_divisor must be positive".to_string(),
            ));
        }
        self.size.validate("size")?;
        self.opacity.validate("opacity")?;
        self.speed.validate("speed")?;
        if self.size.min <= 0.0 {
            return Err(BackgroundError::InvalidRange {
                name: "size",
                min: self.size.min,
                max: self.size.max,
            });
        }
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(BackgroundError::InvalidRange {
                name: "opacity",
                min: self.opacity.min,
                max: self.opacity.max,
            });
        }
        if !self.rotation_step.is_finite() {
            return Err(BackgroundError::InvalidConfig(
                "rotation_step must be finite".to_string(),
            ));
        }
        if self.glyphs.is_empty() {
            return Err(BackgroundError::EmptyCatalog);
        }
        Ok(())
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            canvas_id: Self::DEFAULT_CANVAS_ID.to_string(),
            density_divisor: Self::DEFAULT_DENSITY_DIVISOR,
            size: Bounds::new(11.0, 23.0),
            opacity: Bounds::new(0.035, 0.135),
            speed: Bounds::new(0.1, 0.35),
            rotation_step: Self::DEFAULT_ROTATION_STEP,
            respawn_offset: 20.0,
            exit_line: -50.0,
            font_family: "Georgia, serif".to_string(),
            glyphs: GlyphCatalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_defaults_are_valid() {
        let config = BackgroundConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.glyphs.len(), 24);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = BackgroundConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, BackgroundConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = BackgroundConfig::from_toml_str(
            r#"
            density_divisor = 10000
            glyphs = ["∞", "π"]
            speed = { min = 0.5, max = 1.0 }
            "#,
        )
        .expect("valid config");
        assert_eq!(config.density_divisor, 10_000);
        assert_eq!(config.glyphs.len(), 2);
        assert_eq!(config.speed, Bounds::new(0.5, 1.0));
        assert_eq!(config.size, Bounds::new(11.0, 23.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            BackgroundConfig::from_toml_str("glyphs = []"),
            Err(BackgroundError::Parse(message)) if message.contains("glyph catalog is empty")
        ));
        assert_eq!(GlyphCatalog::new(Vec::new()), Err(BackgroundError::EmptyCatalog));
        assert!(matches!(
            BackgroundConfig::from_toml_str("opacity = { min = 0.5, max = 0.2 }"),
            Err(BackgroundError::InvalidRange { name: "opacity", .. })
        ));
        assert!(matches!(
            BackgroundConfig::from_toml_str("density_divisor = 0"),
            Err(BackgroundError::InvalidConfig(_))
        ));
        assert!(matches!(
            BackgroundConfig::from_toml_str("density_divisor = \"lots\""),
            Err(BackgroundError::Parse(_))
        ));
    }

    #[test]
    fn test_bounds_sample_stays_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let bounds = Bounds::new(0.1, 0.35);
        for _ in 0..10_000 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
        assert!((Bounds::new(2.0, 2.0).sample(&mut rng) - 2.0).abs() < f32::EPSILON);
    }
}
