//! Hosted stand-in for the display: reads commands from stdin, one per line,
//! draws them, and writes the frame the transfer engine would have sent as a
//! binary PPM on stdout.
//!
//! Pixels are shown as `0x00RRGGBB`. Set `VGACMD_LOG` to one of `error`,
//! `warn`, `info`, `debug`, or `trace` to see the pipeline's diagnostics on
//! stderr (default `warn`).
//!
//! ```text
//! echo 'RECT;10;10;100;60;0xFF0000;fill' | vgasim > out.ppm
//! ```

use std::io::{self, BufRead, Write};

use log::{LevelFilter, Metadata, Record};

use vgacmd::{Config, Framebuffer, Pixel, TransferEngine, HEIGHT, PIXELS, WIDTH};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("vgacmd: {}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("VGACMD_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Transfer engine that keeps the last frame it was asked to send.
struct Capture {
    frame: Vec<Pixel>,
    transfers: usize,
}

impl TransferEngine for Capture {
    fn reset(&mut self) {}

    fn start(&mut self, frame: &[Pixel]) {
        self.frame.copy_from_slice(frame);
        self.transfers += 1;
    }

    fn resend(&mut self) {
        self.transfers += 1;
    }

    fn acknowledge(&mut self) {}
}

fn write_ppm(frame: &[Pixel], mut out: impl Write) -> io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", WIDTH, HEIGHT)?;
    let mut row = Vec::with_capacity(WIDTH * 3);
    for line in frame.chunks(WIDTH) {
        row.clear();
        for &p in line {
            row.extend_from_slice(&[(p >> 16) as u8, (p >> 8) as u8, p as u8]);
        }
        out.write_all(&row)?;
    }
    out.flush()
}

fn main() -> io::Result<()> {
    init_logging();

    let mut fb = Framebuffer::new(vec![0; PIXELS]);
    let (mut painter, mut scanout) = fb.split(Config::default());
    let mut engine = Capture {
        frame: vec![0; PIXELS],
        transfers: 0,
    };
    scanout.start(&mut engine);

    let stdin = io::stdin();
    let mut failures = 0;
    for (n, line) in stdin.lock().split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        if let Err(e) = painter.write(&line) {
            eprintln!("line {}: {}", n + 1, e);
            failures += 1;
        }
        // Each completed command is followed by at least one refresh.
        scanout.service_interrupt(&mut engine);
    }
    scanout.stop(&mut engine);
    log::info!("{} transfers", engine.transfers);

    let stdout = io::stdout();
    write_ppm(&engine.frame, stdout.lock())?;

    if failures > 0 {
        eprintln!("{} command(s) failed", failures);
        std::process::exit(1);
    }
    Ok(())
}
