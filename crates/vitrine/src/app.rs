//! The assembled page.
//!
//! ```text
//! SiteConfig ──► Portfolio ──┬── ThemeManager ──ThemeHandle──┐
//!                            ├── ParticleAnimator ◄──────────┘
//!                            ├── TypingEffect
//!                            ├── Carousel + ProjectModal
//!                            ├── Navbar + MobileMenu
//!                            └── ScrollReveal + SmoothScroll
//! ```
//!
//! The host forwards DOM events to the `on_*`/`handle_*` methods and
//! mirrors the resulting state onto the page.

use rand_chacha::ChaCha8Rng;
use vitrine_background::{DrawSurface, FrameScheduler, ParticleAnimator};
use vitrine_ui::{Key, Rect, ThemeMode};

use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::menu::MobileMenu;
use crate::navbar::Navbar;
use crate::projects::ProjectModal;
use crate::reveal::ScrollReveal;
use crate::scroll::SmoothScroll;
use crate::theme::{PreferenceStore, ThemeHandle, ThemeManager};
use crate::typing::TypingEffect;

/// The background animator as wired into the page.
pub type Background<S, F> = ParticleAnimator<S, ThemeHandle, F, ChaCha8Rng>;

/// Everything the page needs from its host.
#[derive(Debug)]
pub struct PortfolioHost<S, F, P> {
    /// Background canvas. `None` leaves the background inert.
    pub surface: Option<S>,
    /// Display refresh loop.
    pub scheduler: F,
    /// Saved preferences.
    pub preferences: P,
    /// Seed for the background generator.
    pub seed: u64,
    /// Ids of the `.reveal` elements.
    pub reveal_ids: Vec<String>,
    /// Whether intersection observation is available.
    pub intersection_observer: bool,
}

/// All page behaviors, built from one [`SiteConfig`].
#[derive(Debug)]
pub struct Portfolio<S, F, P>
where
    F: FrameScheduler,
    P: PreferenceStore,
{
    theme: ThemeManager<P>,
    background: Background<S, F>,
    typing: TypingEffect,
    carousel: Carousel,
    projects: ProjectModal,
    navbar: Navbar,
    menu: MobileMenu,
    reveal: ScrollReveal,
    scroll: SmoothScroll,
    destroyed: bool,
}

impl<S, F, P> Portfolio<S, F, P>
where
    S: DrawSurface,
    F: FrameScheduler,
    P: PreferenceStore,
{
    /// Builds every behavior. The background draws once and requests its
    /// first frame before this returns.
    pub fn new(config: SiteConfig, host: PortfolioHost<S, F, P>) -> Self {
        let theme = ThemeManager::new(host.preferences, config.theme);
        let background = ParticleAnimator::with_seed(
            host.surface,
            theme.handle(),
            host.scheduler,
            host.seed,
            config.background,
        );
        let carousel = Carousel::new(
            config.projects.len(),
            config.carousel_gap,
            config.carousel_threshold,
        );

        let portfolio = Self {
            typing: TypingEffect::new(&config.typing),
            projects: ProjectModal::new(config.projects),
            navbar: Navbar::new(config.navbar_threshold),
            menu: MobileMenu::new(),
            reveal: ScrollReveal::new(
                host.reveal_ids,
                config.reveal_threshold,
                host.intersection_observer,
            ),
            scroll: SmoothScroll::default(),
            theme,
            background,
            carousel,
            destroyed: false,
        };

        tracing::info!(
            theme = %portfolio.theme.current(),
            particles = portfolio.background.field().len(),
            projects = portfolio.carousel.total(),
            "portfolio initialized"
        );
        portfolio
    }

    /// Switches theme. The background picks it up on its next frame.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Opens the mobile menu.
    pub fn open_mobile_menu(&mut self) {
        self.menu.open();
    }

    /// Closes the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.menu.close();
    }

    /// Opens the project modal on `index`. Returns false if there is no such project.
    pub fn open_project_modal(&mut self, index: usize) -> bool {
        self.projects.open(index).is_some()
    }

    /// Closes the project modal.
    pub fn close_project_modal(&mut self) {
        self.projects.close();
    }

    /// Next carousel card. Returns the new track offset, if it moved.
    pub fn next_project(&mut self) -> Option<f32> {
        self.carousel.next()
    }

    /// Previous carousel card. Returns the new track offset, if it moved.
    pub fn prev_project(&mut self) -> Option<f32> {
        self.carousel.prev()
    }

    /// Carousel dot click. Returns the new track offset.
    pub fn go_to_project(&mut self, index: usize) -> Option<f32> {
        self.carousel.go_to(index)
    }

    /// The project track was scrolled by hand. `cards` are the card boxes in
    /// order. Returns true if the current card changed.
    pub fn on_carousel_scroll(&mut self, track: &Rect, cards: &[Rect]) -> bool {
        self.carousel.on_track_scroll(track, cards)
    }

    /// Anchor click: starts a smooth scroll from `scroll_y` to `target`,
    /// whose box is in viewport coordinates.
    pub fn scroll_to_section(&mut self, scroll_y: f32, target: &Rect) {
        self.scroll.jump_to(scroll_y);
        self.scroll.scroll_to_element(target);
    }

    /// Advances a smooth scroll by `dt` seconds. Returns the offset to apply,
    /// or `None` once nothing is in flight.
    pub fn scroll_frame(&mut self, dt: f32) -> Option<f32> {
        if self.destroyed || !self.scroll.is_scrolling() {
            return None;
        }
        Some(self.scroll.update(dt))
    }

    /// Document-level keydown. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        self.projects.on_key(key)
    }

    /// Window scroll. Updates the navbar and returns the ids newly revealed.
    pub fn on_scroll<'a>(
        &mut self,
        scroll_y: f32,
        viewport: &Rect,
        reveal_rects: &[(&'a str, Rect)],
    ) -> Vec<&'a str> {
        self.navbar.on_scroll(scroll_y);
        self.reveal.on_scroll(viewport, reveal_rects)
    }

    /// Window resize. Regenerates the background field.
    pub fn on_resize(&mut self) {
        self.background.resize();
    }

    /// The background's frame callback fired.
    pub fn frame(&mut self) {
        self.background.tick();
    }

    /// Stops the background, disconnects scroll reveal and stops typing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.background.stop();
        self.reveal.disconnect();
        self.typing.stop();
        self.destroyed = true;
        tracing::info!("portfolio destroyed");
    }

    /// Classes `<body>` should carry right now.
    #[must_use]
    pub fn body_classes(&self) -> Vec<&'static str> {
        self.menu
            .body_class()
            .into_iter()
            .chain(self.projects.body_class())
            .collect()
    }

    /// Returns true after [`Portfolio::destroy`].
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Theme manager.
    #[must_use]
    pub fn theme(&self) -> &ThemeManager<P> {
        &self.theme
    }

    /// Background animator.
    #[must_use]
    pub fn background(&self) -> &Background<S, F> {
        &self.background
    }

    /// Mutable background animator.
    pub fn background_mut(&mut self) -> &mut Background<S, F> {
        &mut self.background
    }

    /// Typing effect.
    #[must_use]
    pub fn typing(&self) -> &TypingEffect {
        &self.typing
    }

    /// Mutable typing effect.
    pub fn typing_mut(&mut self) -> &mut TypingEffect {
        &mut self.typing
    }

    /// Carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Mutable carousel.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Project modal.
    #[must_use]
    pub fn projects(&self) -> &ProjectModal {
        &self.projects
    }

    /// Mutable project modal.
    pub fn projects_mut(&mut self) -> &mut ProjectModal {
        &mut self.projects
    }

    /// Navbar.
    #[must_use]
    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    /// Mobile menu.
    #[must_use]
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Mutable mobile menu.
    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    /// Scroll reveal.
    #[must_use]
    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    /// Smooth scroller.
    #[must_use]
    pub fn scroll(&self) -> &SmoothScroll {
        &self.scroll
    }
}
