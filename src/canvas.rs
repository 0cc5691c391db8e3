//! The fixed-size drawing surface.

use crate::Pixel;

/// Canvas width in pixels.
pub const WIDTH: usize = 640;
/// Canvas height in pixels.
pub const HEIGHT: usize = 480;
/// Number of pixels in the canvas; also the number of words the transfer
/// engine moves per frame.
pub const PIXELS: usize = WIDTH * HEIGHT;
/// Size of one frame in bytes.
pub const FRAME_BYTES: usize = PIXELS * core::mem::size_of::<Pixel>();

/// A 640x480 grid of 32-bit pixels stored row-major in `B`, so pixel `(x, y)`
/// lives at index `y * WIDTH + x`.
///
/// The canvas does not care what the bits of a pixel mean; that is up to
/// whoever scans it out.
///
/// `B` is any owned or borrowed word buffer -- a `&'static mut` array on
/// hardware, a `Vec` in simulation.
#[derive(Debug)]
pub struct Canvas<B> {
    buf: B,
}

impl<B> Canvas<B>
where
    B: AsRef<[Pixel]> + AsMut<[Pixel]>,
{
    /// Takes ownership of `buf` and zeroes it.
    ///
    /// # Panics
    ///
    /// If `buf` is not exactly `PIXELS` words long.
    pub fn new(mut buf: B) -> Self {
        assert_eq!(
            buf.as_ref().len(),
            PIXELS,
            "canvas buffer must hold {}x{} pixels",
            WIDTH,
            HEIGHT
        );
        for px in buf.as_mut() {
            *px = 0;
        }
        Canvas { buf }
    }

    /// Sets every pixel back to zero.
    pub fn clear(&mut self) {
        for px in self.buf.as_mut() {
            *px = 0;
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        self.buf.as_ref()
    }

    /// Reads pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// If the point is off the canvas.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        assert!(x < WIDTH && y < HEIGHT);
        self.buf.as_ref()[y * WIDTH + x]
    }

    /// Gives the buffer back.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Draws an axis-aligned line; see `gfx::draw_line_unclipped`.
    pub(crate) fn line(
        &mut self,
        (x0, y0): (usize, usize),
        (x1, y1): (usize, usize),
        color: Pixel,
    ) {
        gfx::draw_line_unclipped(x0, y0, x1, y1, color, self.buf.as_mut(), WIDTH)
    }

    /// Fills a closed rectangle; see `gfx::fill_rect`.
    pub(crate) fn fill(
        &mut self,
        (x0, y0): (usize, usize),
        (x1, y1): (usize, usize),
        color: Pixel,
    ) {
        gfx::fill_rect(x0, y0, x1, y1, color, self.buf.as_mut(), WIDTH)
    }

    /// Copies a `width`-wide image to `(x, y)`; see `gfx::blit`.
    pub(crate) fn blit(
        &mut self,
        (x, y): (usize, usize),
        width: usize,
        src: &[Pixel],
    ) {
        gfx::blit(x, y, width, src, self.buf.as_mut(), WIDTH)
    }
}
