//! The canvas as shared between the painter and the transfer engine.

use log::info;

use crate::canvas::Canvas;
use crate::painter::Painter;
use crate::scanout::Scanout;
use crate::util::rw_lock::ReadWriteLock;
use crate::{Config, Pixel};

/// Owns the canvas for the life of the display.
///
/// Nothing draws on a `Framebuffer` directly. Call `split` to get the two
/// handles that do the work.
pub struct Framebuffer<B> {
    canvas: ReadWriteLock<Canvas<B>>,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[Pixel]> + AsMut<[Pixel]>,
{
    /// Takes over `buf` as the canvas and zeroes it.
    ///
    /// # Panics
    ///
    /// If `buf` is not exactly `PIXELS` words long.
    pub fn new(buf: B) -> Self {
        let canvas = Canvas::new(buf);
        info!("canvas allocated and cleared");
        Framebuffer {
            canvas: ReadWriteLock::new(canvas),
        }
    }

    /// Produces the writer and reader handles. Both borrow the framebuffer,
    /// so it can't be torn down while either is alive.
    pub fn split(&mut self, config: Config) -> (Painter<'_, B>, Scanout<'_, B>) {
        (
            Painter::new(&self.canvas, config),
            Scanout::new(&self.canvas),
        )
    }

    /// Direct access to the canvas while no handles exist.
    pub fn canvas(&mut self) -> &Canvas<B> {
        self.canvas.get_mut()
    }

    /// Gives the buffer back.
    pub fn into_inner(self) -> B {
        self.canvas.into_inner().into_inner()
    }
}
