//! Recorded draw commands.
//!
//! The browser draws straight into a canvas. Everywhere else (tests, the
//! headless preview) a [`DrawList`] records what would have been drawn so
//! frames can be inspected.

use crate::style::Color;

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the whole surface.
    Clear {
        /// Surface width.
        width: u32,
        /// Surface height.
        height: u32,
    },
    /// Filled text, rotated about its own origin.
    Text {
        /// Text content.
        text: String,
        /// X position of the text origin.
        x: f32,
        /// Y position of the text origin (baseline).
        y: f32,
        /// Rotation in radians, applied after translation.
        rotation: f32,
        /// Fill color, alpha included.
        color: Color,
        /// Font size in pixels.
        font_size: f32,
        /// CSS font family list.
        font_family: String,
    },
}

impl RenderCommand {
    /// Returns the CSS font shorthand for a text command.
    #[must_use]
    pub fn font(&self) -> Option<String> {
        match self {
            Self::Text {
                font_size,
                font_family,
                ..
            } => Some(format!("{font_size}px {font_family}")),
            Self::Clear { .. } => None,
        }
    }
}

/// Per-frame command recorder.
#[derive(Debug, Default)]
pub struct DrawList {
    /// Commands of the frame being recorded.
    commands: Vec<RenderCommand>,
    /// Commands of the last finished frame.
    finished: Vec<RenderCommand>,
    /// Number of finished frames.
    frames: u64,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(128),
            finished: Vec::new(),
            frames: 0,
        }
    }

    /// Begins a new frame, finishing the current one if it has commands.
    pub fn begin_frame(&mut self) {
        if !self.commands.is_empty() {
            self.finish_frame();
        }
    }

    /// Adds a command to the current frame.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Finishes the current frame and returns its commands.
    pub fn finish_frame(&mut self) -> &[RenderCommand] {
        self.finished = std::mem::take(&mut self.commands);
        self.frames += 1;
        &self.finished
    }

    /// Commands recorded so far in the current frame.
    #[must_use]
    pub fn current(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Commands of the last finished frame.
    #[must_use]
    pub fn last_frame(&self) -> &[RenderCommand] {
        &self.finished
    }

    /// Returns the number of commands in the current frame.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns the number of finished frames.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
