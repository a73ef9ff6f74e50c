//! # VITRINE BACKGROUND
//!
//! Mathematical notation drifting slowly up the page behind the content.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   PARTICLE ANIMATOR                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  BackgroundConfig → ParticleField → GlyphDraw commands    │
//! │         ↓                 ↑                ↓              │
//! │     TOML / defaults    seeded Rng     DrawSurface         │
//! │                                                           │
//! │  FrameScheduler ──fires──► tick ──requests──► next frame  │
//! │  ThemeSource    ──read on every render (ink color)        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! All randomness flows through one injected generator. Two animators with
//! the same seed, viewport and tick sequence draw identical frames.
//!
//! ```
//! use vitrine_background::{BackgroundConfig, ManualScheduler, ParticleAnimator, RecordingSurface};
//! use vitrine_ui::ThemeMode;
//!
//! let clock = ManualScheduler::new();
//! let mut animator = ParticleAnimator::with_seed(
//!     Some(RecordingSurface::new(800, 600)),
//!     ThemeMode::Dark,
//!     clock.clone(),
//!     7,
//!     BackgroundConfig::default(),
//! );
//! assert_eq!(animator.field().len(), 18);
//!
//! while clock.fire() && animator.frames() < 3 {
//!     animator.tick();
//! }
//! animator.stop();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod animator;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod ports;
pub mod surface;

pub use animator::ParticleAnimator;
pub use config::{BackgroundConfig, Bounds, GlyphCatalog};
pub use error::{BackgroundError, BackgroundResult};
pub use field::ParticleField;
pub use particle::{Particle, SpawnPlacement};
pub use ports::{DrawSurface, FrameScheduler, GlyphDraw, ThemeSource};
pub use surface::{FrameHandle, ManualScheduler, RecordingSurface};
