//! Host-side adapters: a surface that records frames and a frame clock
//! that fires only when told to.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_ui::{DrawList, RenderCommand};

use crate::ports::{DrawSurface, FrameScheduler, GlyphDraw};

/// A [`DrawSurface`] that records draw commands instead of rasterizing.
#[derive(Debug)]
pub struct RecordingSurface {
    viewport: (u32, u32),
    backing: (u32, u32),
    draws: DrawList,
    /// Count of every call that would touch pixels.
    mutations: u64,
}

impl RecordingSurface {
    /// Creates a surface whose viewport is `width` x `height`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            backing: (0, 0),
            draws: DrawList::new(),
            mutations: 0,
        }
    }

    /// Simulates a window resize. Call the animator's `resize` afterwards.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Size of the backing raster.
    #[must_use]
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    /// Commands of the frame drawn most recently (since the last clear).
    #[must_use]
    pub fn frame(&self) -> &[RenderCommand] {
        self.draws.current()
    }

    /// Number of clears so far.
    #[must_use]
    pub fn clear_count(&self) -> u64 {
        self.draws.frame_count() + u64::from(!self.draws.current().is_empty())
    }

    /// Number of pixel-touching calls so far.
    #[must_use]
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }
}

impl DrawSurface for RecordingSurface {
    fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.mutations += 1;
    }

    fn clear(&mut self) {
        self.draws.begin_frame();
        self.draws.push(RenderCommand::Clear {
            width: self.backing.0,
            height: self.backing.1,
        });
        self.mutations += 1;
    }

    fn draw_glyph(&mut self, glyph: &GlyphDraw<'_>) {
        self.draws.push(RenderCommand::Text {
            text: glyph.text.to_string(),
            x: glyph.x,
            y: glyph.y,
            rotation: glyph.rotation,
            color: glyph.color,
            font_size: glyph.font_size,
            font_family: glyph.font_family.to_string(),
        });
        self.mutations += 1;
    }
}

/// Handle issued by [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

#[derive(Debug, Default)]
struct ClockState {
    next: u64,
    pending: Option<u64>,
    requested: u64,
    cancelled: u64,
}

/// A frame clock fired by hand.
///
/// Clones share state, so the driver keeps one clone and gives the other
/// to the animator.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl ManualScheduler {
    /// Creates a clock with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the pending request. Returns true if there was one, in which
    /// case the driver should call `tick`.
    pub fn fire(&self) -> bool {
        self.state.borrow_mut().pending.take().is_some()
    }

    /// Returns true if a request is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Total requests made.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.state.borrow().requested
    }

    /// Total requests cancelled while pending.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.state.borrow().cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameHandle;

    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut state = self.state.borrow_mut();
        state.next += 1;
        state.requested += 1;
        let id = state.next;
        state.pending = Some(id);
        Some(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        if state.pending == Some(handle.0) {
            state.pending = None;
            state.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_single_pending() {
        let clock = ManualScheduler::new();
        let mut handle_side = clock.clone();

        assert!(!clock.fire());
        let first = handle_side.request_frame().expect("manual clock always schedules");
        assert!(clock.is_pending());

        handle_side.cancel_frame(first);
        assert!(!clock.is_pending());
        assert_eq!(clock.cancelled(), 1);

        // Cancelling again is ignored.
        handle_side.cancel_frame(first);
        assert_eq!(clock.cancelled(), 1);

        handle_side.request_frame();
        assert!(clock.fire());
        assert!(!clock.fire());
        assert_eq!(clock.requested(), 2);
    }

    #[test]
    fn test_recording_surface_frames() {
        let mut surface = RecordingSurface::new(320, 200);
        surface.resize_backing(320, 200);
        surface.clear();
        assert_eq!(
            surface.frame(),
            &[RenderCommand::Clear {
                width: 320,
                height: 200
            }]
        );
        surface.clear();
        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.mutation_count(), 3);
    }
}
