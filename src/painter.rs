//! The write side of the framebuffer: turns commands into pixels.

use log::{debug, error, info};

use crate::canvas::Canvas;
use crate::command;
use crate::prim::{Outcome, Primitive};
use crate::util::rw_lock::ReadWriteLock;
use crate::{Config, Error, Pixel};

/// The only writer of the canvas.
///
/// Each command runs to completion under the canvas write lock, so the
/// scanout path sees either none of a primitive or all of it.
pub struct Painter<'a, B> {
    canvas: &'a ReadWriteLock<Canvas<B>>,
    config: Config,
}

impl<'a, B> Painter<'a, B>
where
    B: AsRef<[Pixel]> + AsMut<[Pixel]>,
{
    pub(crate) fn new(canvas: &'a ReadWriteLock<Canvas<B>>, config: Config) -> Self {
        Painter { canvas, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accepts a raw command as it would arrive from a client.
    ///
    /// Input of `max_command_len` bytes or more is refused before it is
    /// looked at, leaving room for the terminator.
    pub fn write(&mut self, bytes: &[u8]) -> Result<Outcome, Error> {
        if bytes.len() >= self.config.max_command_len {
            return Err(report(Error::CommandTooLong));
        }
        let line =
            core::str::from_utf8(bytes).map_err(|_| report(Error::NotText))?;
        self.execute(line)
    }

    /// Parses, validates, and draws one command.
    ///
    /// On error the canvas is untouched.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        let fields = command::parse(line).map_err(report)?;
        for (i, field) in fields.iter().enumerate() {
            debug!("{}: {}", i, field);
        }
        let prim = Primitive::build(&fields, &self.config).map_err(report)?;
        debug!("{:?}", prim);
        Ok(self.draw(&prim))
    }

    /// Draws an already-validated primitive.
    pub fn draw(&mut self, prim: &Primitive) -> Outcome {
        let mut canvas = self.canvas.lock_mut();
        prim.draw(&mut canvas)
    }

    /// Sets every pixel back to zero.
    pub fn reset(&mut self) {
        self.canvas.lock_mut().clear();
        info!("canvas reset");
    }
}

fn report(e: Error) -> Error {
    error!("{}", e);
    e
}
