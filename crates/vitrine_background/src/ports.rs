//! Seams between the animator and its host.
//!
//! The browser supplies a canvas, the `data-theme` attribute and
//! `requestAnimationFrame`. Tests and the preview binary supply the
//! adapters in [`crate::surface`].

use std::fmt;

use vitrine_ui::{Color, ThemeMode};

/// Read-only access to the page theme flag.
pub trait ThemeSource {
    /// Current mode.
    fn mode(&self) -> ThemeMode;
}

impl ThemeSource for ThemeMode {
    fn mode(&self) -> ThemeMode {
        *self
    }
}

impl<T: ThemeSource + ?Sized> ThemeSource for &T {
    fn mode(&self) -> ThemeMode {
        (**self).mode()
    }
}

/// One glyph to draw: translate to (x, y), rotate, fill text at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw<'a> {
    /// Text to fill.
    pub text: &'a str,
    /// Translation x.
    pub x: f32,
    /// Translation y.
    pub y: f32,
    /// Rotation in radians, applied after translation.
    pub rotation: f32,
    /// Font size in pixels.
    pub font_size: f32,
    /// CSS font family list.
    pub font_family: &'a str,
    /// Fill color with the glyph's alpha.
    pub color: Color,
}

impl GlyphDraw<'_> {
    /// CSS font shorthand, e.g. `14.5px Georgia, serif`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// A 2D raster the field is drawn onto.
pub trait DrawSurface {
    /// Available viewport size in CSS pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Resizes the backing raster.
    fn resize_backing(&mut self, width: u32, height: u32);

    /// Clears the whole raster.
    fn clear(&mut self);

    /// Draws one glyph.
    fn draw_glyph(&mut self, glyph: &GlyphDraw<'_>);
}

/// The display refresh loop.
///
/// The animator asks for exactly one callback at a time. The host calls
/// [`crate::ParticleAnimator::tick`] when that callback fires.
pub trait FrameScheduler {
    /// Token for a pending request.
    type Handle: Copy + fmt::Debug;

    /// Requests one callback at the next refresh. `None` if the host could
    /// not schedule it, which ends the loop.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Cancels a pending request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: Self::Handle);
}
