//! # VITRINE
//!
//! Client-side behavior of a personal portfolio page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          VITRINE                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐   │
//! │  │  vitrine_ui  │───>│  vitrine (this)  │<───│  vitrine_    │   │
//! │  │              │    │                  │    │  background  │   │
//! │  │ • Theme      │    │ • Portfolio      │    │ • Particles  │   │
//! │  │ • Widgets    │    │ • Page behaviors │    │ • Animator   │   │
//! │  │ • Draw list  │    │ • SiteConfig     │    │ • Ports      │   │
//! │  └──────────────┘    └────────┬─────────┘    └──────────────┘   │
//! │                               │                                 │
//! │                  ┌────────────┴────────────┐                    │
//! │                  │ web (wasm32)            │                    │
//! │                  │ canvas, rAF, storage    │                    │
//! │                  └─────────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `theme`: dark/light switching and the saved preference
//! - `typing`: hero typing effect
//! - `carousel` / `projects`: project cards and the detail modal
//! - `navbar` / `menu`: header scroll state and the mobile drawer
//! - `reveal` / `scroll`: scroll-driven reveal and smooth scrolling
//! - `app`: the assembled page

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod projects;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{Background, Portfolio, PortfolioHost};
pub use carousel::Carousel;
pub use config::{SiteConfig, TypingConfig};
pub use error::{SiteError, SiteResult};
pub use menu::MobileMenu;
pub use navbar::Navbar;
pub use projects::{Metric, Project, ProjectLink, ProjectModal, ProjectView};
pub use reveal::ScrollReveal;
pub use scroll::SmoothScroll;
pub use theme::{IconVisibility, MemoryPreferences, PreferenceStore, ThemeHandle, ThemeManager};
pub use typing::{TypingEffect, TypingStep};

// Re-export the building blocks
pub use vitrine_background as background;
pub use vitrine_ui as ui;
