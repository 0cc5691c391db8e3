//! Command-driven rasterizer for a 640x480 scanned-out framebuffer.
//!
//! Clients describe what to draw with short text commands (see [`command`]).
//! Each command is parsed into fields, built into a validated primitive (see
//! [`prim`]), and drawn straight into the canvas, which a transfer engine scans
//! out to the display continuously (see [`scanout`]).
//!
//! # Theory of operation
//!
//! The canvas lives inside a [`Framebuffer`]. Splitting the framebuffer gives
//! two handles: a [`Painter`], which is the only thing that ever writes pixels,
//! and a [`Scanout`], which the transfer engine's interrupt path uses to read
//! them. The painter holds the canvas for the length of one command, so a
//! refresh never shows half a primitive; a refresh that lands during a command
//! is skipped and the display keeps its previous frame.
//!
//! Commands are independent. A rejected command leaves the canvas exactly as
//! it was. Text that runs off the right edge is the one partial case: it is
//! drawn up to the edge and reported as [`Outcome::Truncated`], unless the
//! painter is configured for [`TextMode::Atomic`].
//!
//! Diagnostics go through the `log` facade; installing a logger is up to the
//! application.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod canvas;
pub mod command;
pub mod error;
pub mod framebuffer;
pub mod glyph;
pub mod number;
pub mod painter;
pub mod prim;
pub mod scanout;
pub mod util;

use smart_default::SmartDefault;

pub use crate::canvas::{Canvas, FRAME_BYTES, HEIGHT, PIXELS, WIDTH};
pub use crate::error::Error;
pub use crate::framebuffer::Framebuffer;
pub use crate::painter::Painter;
pub use crate::prim::{Outcome, Primitive};
pub use crate::scanout::{MapError, Scanout, TransferEngine};

/// Representation of a pixel in memory.
///
/// The rasterizer treats this as an opaque 32-bit value. Channel layout is the
/// display hardware's business.
pub type Pixel = u32;

/// A color as given in a command. Only the low 32 bits reach the canvas.
pub type Color = u64;

/// Longest raw command the write path accepts, in bytes, terminator included.
pub const MAX_COMMAND_LEN: usize = 100;

/// Policy for text that doesn't fit on the canvas.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub enum TextMode {
    /// Check only that the first character fits; draw until the next one
    /// would cross the right edge, then stop.
    #[default]
    BestEffort,
    /// Reject the command unless the whole string fits.
    Atomic,
}

/// Painter configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    pub text_mode: TextMode,
    /// Longest raw command accepted by `Painter::write`, in bytes, terminator
    /// included.
    #[default(MAX_COMMAND_LEN)]
    pub max_command_len: usize,
}
