//! Raster algorithms for linear 32-bit pixel buffers.
//!
//! Every routine here takes the buffer as a slice of rows, each `stride` words
//! long, and writes pixel values unconditionally. Nothing is blended and
//! nothing is clipped: coordinates are bounds-checked up front and a bad
//! coordinate is a panic, not a partial draw. Callers that take coordinates
//! from the outside world are expected to validate them first.
//!
//! This module is deliberately architecture-independent to allow for testing on
//! the host.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use core::mem::swap;

/// Orientation of an axis-aligned line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Classifies the line from `(x0, y0)` to `(x1, y1)`.
    ///
    /// Lines with equal Y are horizontal -- including the degenerate
    /// single-point line. Otherwise lines with equal X are vertical. Anything
    /// else is diagonal, and gets `None`.
    pub fn between(x0: usize, y0: usize, x1: usize, y1: usize) -> Option<Self> {
        if y0 == y1 {
            Some(Direction::Horizontal)
        } else if x0 == x1 {
            Some(Direction::Vertical)
        } else {
            None
        }
    }
}

/// Computes the word offset of `(x, y)`, with overflow checking.
///
/// # Panics
///
/// If `x` is not inside a row, or the offset does not fit in a `usize`.
fn compute_offset(x: usize, y: usize, stride: usize) -> usize {
    assert!(x < stride, "x coordinate {} outside stride {}", x, stride);
    y.checked_mul(stride)
        .and_then(|row| row.checked_add(x))
        .unwrap()
}

/// Writes `color` to every `step`th word of `buf` from `start` through `end`
/// inclusive.
fn draw_run(buf: &mut [u32], start: usize, end: usize, step: usize, color: u32) {
    for px in buf[start..=end].iter_mut().step_by(step) {
        *px = color;
    }
}

/// Draws an axis-aligned line from `(x0, y0)` to `(x1, y1)` inclusive, by
/// setting pixels to `color`, without clipping.
///
/// The endpoints can be given in either order; the line is always walked from
/// its lower coordinate to its higher one. A line from a point to itself sets
/// that one pixel.
///
/// # Panics
///
/// If the line is diagonal, or either endpoint falls outside the buffer.
pub fn draw_line_unclipped(
    mut x0: usize,
    mut y0: usize,
    mut x1: usize,
    mut y1: usize,
    color: u32,
    buf: &mut [u32],
    stride: usize,
) {
    let dir = Direction::between(x0, y0, x1, y1)
        .expect("draw_line_unclipped only handles axis-aligned lines");

    // Flip things as necessary to ensure that we draw left to right or top to
    // bottom.
    if (x0, y0) > (x1, y1) {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    // Bounds-check both ends of the line.
    let start = compute_offset(x0, y0, stride);
    let end = compute_offset(x1, y1, stride);
    assert!(start < buf.len() && end < buf.len());

    let step = match dir {
        Direction::Horizontal => 1,
        Direction::Vertical => stride,
    };
    draw_run(buf, start, end, step, color)
}

/// Fills the closed rectangle with corners `(x0, y0)` and `(x1, y1)` with
/// `color`.
///
/// # Panics
///
/// If `x0 > x1` or `y0 > y1`, or if either corner falls outside the buffer.
pub fn fill_rect(
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    color: u32,
    buf: &mut [u32],
    stride: usize,
) {
    assert!(x0 <= x1 && y0 <= y1, "rectangle corners out of order");
    let last = compute_offset(x1, y1, stride);
    assert!(last < buf.len());

    for row in buf.chunks_mut(stride).skip(y0).take(y1 - y0 + 1) {
        for px in &mut row[x0..=x1] {
            *px = color;
        }
    }
}

/// Copies a `width`-word-wide image from `src` into `buf` with its top-left
/// corner at `(x, y)`. `src` is row-major with no padding, so its height is
/// `src.len() / width`.
///
/// # Panics
///
/// If `src` is not a whole number of rows, or the image does not fit entirely
/// inside `buf`.
pub fn blit(
    x: usize,
    y: usize,
    width: usize,
    src: &[u32],
    buf: &mut [u32],
    stride: usize,
) {
    if width == 0 || src.is_empty() {
        return;
    }
    assert_eq!(src.len() % width, 0, "source is not a whole number of rows");
    let height = src.len() / width;
    let last = compute_offset(x + width - 1, y + height - 1, stride);
    assert!(last < buf.len());

    for (dst_row, src_row) in buf
        .chunks_mut(stride)
        .skip(y)
        .zip(src.chunks(width))
    {
        dst_row[x..x + width].copy_from_slice(src_row);
    }
}
