//! The read side of the framebuffer, and the boundary to the transfer engine
//! that moves frames to the display.
//!
//! The engine runs on its own: once started, it raises an interrupt each time
//! a frame transfer completes, and the interrupt handler is expected to call
//! `Scanout::service_interrupt` to acknowledge it and kick off the next one.
//! There is no frame counter or vsync fed back to the painter.

use core::fmt;

use log::{info, warn};

use crate::canvas::{Canvas, FRAME_BYTES};
use crate::util::rw_lock::{Guard, ReadWriteLock};
use crate::Pixel;

/// Hardware that sends frames to the display.
///
/// An engine keeps its own physically contiguous copy of the frame; `start`
/// refreshes that copy from the canvas, `resend` reuses it.
pub trait TransferEngine {
    /// Halts any transfer in progress and returns the engine to idle, with
    /// completion interrupts enabled.
    fn reset(&mut self);

    /// Copies `frame` (exactly `PIXELS` words) and begins transferring it.
    fn start(&mut self, frame: &[Pixel]);

    /// Begins transferring the frame most recently passed to `start`.
    fn resend(&mut self);

    /// Clears the transfer-complete interrupt.
    fn acknowledge(&mut self);
}

/// Failure of `Scanout::map`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MapError {
    /// More bytes were requested than the frame holds.
    TooLarge { requested: usize },
    /// The painter is mid-command.
    Busy,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::TooLarge { requested } => write!(
                f,
                "can't map {} bytes of a {} byte frame",
                requested, FRAME_BYTES
            ),
            MapError::Busy => write!(f, "canvas is being drawn"),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "std"))] {
        impl std::error::Error for MapError {}
    }
}

/// Read-only handle on the canvas, for the transfer path.
pub struct Scanout<'a, B> {
    canvas: &'a ReadWriteLock<Canvas<B>>,
    skipped: usize,
}

impl<'a, B> Scanout<'a, B>
where
    B: AsRef<[Pixel]> + AsMut<[Pixel]>,
{
    pub(crate) fn new(canvas: &'a ReadWriteLock<Canvas<B>>) -> Self {
        Scanout { canvas, skipped: 0 }
    }

    /// Resets `engine` and sends it the first frame.
    pub fn start<E: TransferEngine + ?Sized>(&mut self, engine: &mut E) {
        engine.reset();
        info!("transfer engine reset, starting scanout");
        self.refresh(engine);
    }

    /// Handles a transfer-complete interrupt: acknowledges it and starts the
    /// next frame.
    pub fn service_interrupt<E: TransferEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) {
        engine.acknowledge();
        self.refresh(engine);
    }

    /// Halts `engine`.
    pub fn stop<E: TransferEngine + ?Sized>(&mut self, engine: &mut E) {
        engine.reset();
        info!("transfer engine stopped after {} skipped refreshes", self.skipped);
    }

    /// Sends the current canvas if the painter isn't using it, or the previous
    /// frame again if it is. Returns `true` if the canvas was sent.
    fn refresh<E: TransferEngine + ?Sized>(&mut self, engine: &mut E) -> bool {
        match self.canvas.lock_uncontended() {
            Some(canvas) => {
                engine.start(canvas.pixels());
                true
            }
            None => {
                self.skipped += 1;
                warn!("canvas busy, resending previous frame");
                engine.resend();
                false
            }
        }
    }

    /// Number of refreshes that had to resend the previous frame.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Runs `f` over the current pixels, unless the painter is mid-command.
    pub fn observe<R>(&self, f: impl FnOnce(&[Pixel]) -> R) -> Option<R> {
        self.canvas.lock_uncontended().map(|c| f(c.pixels()))
    }

    /// Runs `f` over the first `len` bytes of the frame, in memory order.
    pub fn map<R>(
        &self,
        len: usize,
        f: impl FnOnce(&[u8]) -> R,
    ) -> Result<R, MapError> {
        if len > FRAME_BYTES {
            return Err(MapError::TooLarge { requested: len });
        }
        let canvas = self.canvas.lock_uncontended().ok_or(MapError::Busy)?;
        let words = Guard::map(canvas, Canvas::pixels);
        // Safety: the canvas holds FRAME_BYTES bytes, `len` is no more than
        // that, and u8 has no alignment or validity requirements.
        let bytes = unsafe {
            core::slice::from_raw_parts(words.as_ptr() as *const u8, len)
        };
        Ok(f(bytes))
    }
}
