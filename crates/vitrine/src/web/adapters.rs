//! `web-sys` implementations of the background ports and the theme
//! preference store, plus the `<html>` theme writer.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_background::{DrawSurface, FrameScheduler, GlyphDraw};
use vitrine_ui::ThemeMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Storage, Window};

use crate::theme::{IconVisibility, PreferenceStore};

/// A `<canvas>` with its 2D context.
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Finds canvas `id` and its 2D context. `None` if either is missing.
    #[must_use]
    pub fn from_document(window: &Window, document: &Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            window: window.clone(),
            canvas,
            context,
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_pixels(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(0, |v| v.max(0.0) as u32)
}

impl DrawSurface for CanvasSurface {
    fn viewport_size(&self) -> (u32, u32) {
        (
            css_pixels(self.window.inner_width()),
            css_pixels(self.window.inner_height()),
        )
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    #[allow(deprecated)]
    fn draw_glyph(&mut self, glyph: &GlyphDraw<'_>) {
        let ctx = &self.context;
        ctx.save();
        // Draw errors only come from a detached canvas; the frame is skipped.
        let _ = ctx.translate(f64::from(glyph.x), f64::from(glyph.y));
        let _ = ctx.rotate(f64::from(glyph.rotation));
        ctx.set_font(&glyph.font());
        ctx.set_fill_style(&JsValue::from_str(&glyph.color.css()));
        let _ = ctx.fill_text(glyph.text, 0.0, 0.0);
        ctx.restore();
    }
}

/// Mirrors the current theme onto the page: the `data-theme` attribute of
/// `<html>` and the toggle icons. The background reads the shared
/// `ThemeHandle`, never the DOM.
pub struct DocumentTheme {
    root: Option<Element>,
    sun: Option<web_sys::HtmlElement>,
    moon: Option<web_sys::HtmlElement>,
}

impl DocumentTheme {
    /// Binds to the document element and the toggle icons.
    #[must_use]
    pub fn new(document: &Document) -> Self {
        let icon = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        };
        Self {
            root: document.document_element(),
            sun: icon("iconSun"),
            moon: icon("iconMoon"),
        }
    }

    /// Writes the attribute and the icon visibility.
    pub fn apply(&self, mode: ThemeMode, icons: IconVisibility) {
        if let Some(root) = &self.root {
            let _ = root.set_attribute("data-theme", mode.as_str());
        }
        if let (Some(sun), Some(moon)) = (&self.sun, &self.moon) {
            let display = |shown: bool| if shown { "block" } else { "none" };
            let _ = sun.style().set_property("display", display(icons.sun));
            let _ = moon.style().set_property("display", display(icons.moon));
        }
    }
}

/// Frame callback shared between the scheduler and whoever fills it in.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl AnimationFrameScheduler {
    /// Schedules `callback` on every request. Until the slot is filled,
    /// requests are refused.
    #[must_use]
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let closure = callback.as_ref()?;
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// `window.localStorage`. Private browsing may deny it; reads then miss and
/// writes are dropped.
pub struct LocalStoragePreferences {
    storage: Option<Storage>,
}

impl LocalStoragePreferences {
    /// Binds to the window's local storage.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}
