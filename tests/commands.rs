//! End-to-end behavior of the command pipeline, observed the way the transfer
//! engine sees it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use vgacmd::command::Keyword;
use vgacmd::{
    Config, Error, Framebuffer, Outcome, Pixel, Scanout, TextMode,
    TransferEngine, HEIGHT, PIXELS, WIDTH,
};

fn framebuffer() -> Framebuffer<Vec<Pixel>> {
    Framebuffer::new(vec![0; PIXELS])
}

/// Every nonzero cell as `(x, y, value)`.
fn written(scanout: &Scanout<'_, Vec<Pixel>>) -> Vec<(usize, usize, Pixel)> {
    scanout
        .observe(|px| {
            px.iter()
                .enumerate()
                .filter(|(_, p)| **p != 0)
                .map(|(i, &p)| (i % WIDTH, i / WIDTH, p))
                .collect()
        })
        .unwrap()
}

fn snapshot(scanout: &Scanout<'_, Vec<Pixel>>) -> Vec<Pixel> {
    scanout.observe(|px| px.to_vec()).unwrap()
}

#[test]
fn hi_small() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    assert_eq!(
        painter.execute("TEXT;HI;small;0;0;0xFFFFFF;0x000000"),
        Ok(Outcome::Complete)
    );

    let h = font_5x7::glyph('H').unwrap().rows();
    let i = font_5x7::glyph('I').unwrap().rows();
    let cells = written(&scanout);
    for &(x, y, p) in &cells {
        assert_eq!(p, 0xFFFFFF);
        assert!(y < 7, "ink below the glyph row at ({}, {})", x, y);
        let (bits, col) = match x {
            0..=4 => (h[y], x),
            6..=10 => (i[y], x - 6),
            _ => panic!("ink outside the glyph cells at ({}, {})", x, y),
        };
        assert!(bits & (0x10 >> col) != 0, "stray ink at ({}, {})", x, y);
    }
    let ink: u32 = h.iter().chain(i.iter()).map(|r| r.count_ones()).sum();
    assert_eq!(cells.len(), ink as usize);
}

#[test]
fn hi_spacers_and_cursor() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    painter.execute("TEXT;HI;small;0;0;0xFFFFFF;0x0000AA").unwrap();
    scanout.observe(|px| {
        for y in 0..7 {
            assert_eq!(px[y * WIDTH + 5], 0xAA);
            assert_eq!(px[y * WIDTH + 11], 0xAA);
            assert_eq!(px[y * WIDTH + 12], 0);
        }
    });
}

#[test]
fn vertical_line() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    painter.execute("LINE;10;10;10;20;0xFF0000").unwrap();
    let cells = written(&scanout);
    assert_eq!(cells.len(), 11);
    for (n, &(x, y, p)) in cells.iter().enumerate() {
        assert_eq!((x, y, p), (10, 10 + n, 0xFF0000));
    }
}

#[test]
fn outline_rect_is_four_lines() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    painter.execute("RECT;0;0;9;9;0x00FF00;no").unwrap();
    let rect = snapshot(&scanout);
    assert_eq!(written(&scanout).len(), 36);

    painter.reset();
    for line in &[
        "LINE;0;0;9;0;0x00FF00",
        "LINE;0;0;0;9;0x00FF00",
        "LINE;0;9;9;9;0x00FF00",
        "LINE;9;0;9;9;0x00FF00",
    ] {
        painter.execute(line).unwrap();
    }
    assert!(snapshot(&scanout) == rect);
}

#[test]
fn filled_rect() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    painter.execute("rect;0;0;9;9;0x00FF00;FILL").unwrap();
    let cells = written(&scanout);
    assert_eq!(cells.len(), 100);
    assert!(cells.iter().all(|&(x, y, _)| x < 10 && y < 10));
}

#[test]
fn rejected_commands_change_nothing() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    painter.execute("RECT;100;100;200;150;0x123456;fill").unwrap();
    painter.execute("TEXT;Hello, world!;big;0;0;0xFF;0x01").unwrap();
    let before = snapshot(&scanout);

    let cases = [
        ("LINE;0;0;5;5;0xFFFFFF", Error::DiagonalLine),
        ("TEXT;HI5;small;0;0;0xFFFFFF;0", Error::UnsupportedChar('5')),
        ("TEXT;HI;medium;0;0;1;0", Error::InvalidFontSize),
        ("RECT;0;0;9;9;1;hollow", Error::InvalidFillMode),
        ("RECT;9;0;0;9;1;fill", Error::InvertedRect),
        ("LINE;0;0;0;480;1", Error::PointOutOfBounds { x: 0, y: 480 }),
        ("PIX;1;1;1", Error::Unimplemented(Keyword::Pixel)),
        ("CIRC;100;100;10;1", Error::Unimplemented(Keyword::Circle)),
        ("LINE;0;0;0;99999999999;1", Error::InvalidNumber { field: 4 }),
        ("LINE;0;0;0", Error::MissingField { field: 4 }),
    ];
    for (cmd, err) in cases.iter() {
        assert_eq!(painter.execute(cmd), Err(*err), "{}", cmd);
    }
    match painter.execute("BOX;0;0;1;1;1") {
        Err(Error::UnknownCommand(word)) => assert_eq!(word.as_str(), "BOX"),
        other => panic!("{:?}", other),
    }
    assert!(snapshot(&scanout) == before);
}

#[test]
fn text_truncates_at_right_edge() {
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());
    // Big glyphs advance 11 columns: 600, 611, 622 fit, 633 doesn't.
    assert_eq!(
        painter.execute("TEXT;ABCD;big;600;10;0xFFFFFF;0x0000FF"),
        Ok(Outcome::Truncated { drawn: 3 })
    );
    let cells = written(&scanout);
    assert!(cells.iter().all(|&(x, y, _)| x >= 600 && x < 633 && y >= 10));
    assert!(cells.iter().any(|&(x, _, _)| x == 632));
}

#[test]
fn atomic_text_is_all_or_nothing() {
    let mut fb = framebuffer();
    let config = Config {
        text_mode: TextMode::Atomic,
        ..Config::default()
    };
    let (mut painter, scanout) = fb.split(config);
    assert_eq!(
        painter.execute("TEXT;ABCD;big;600;10;0xFFFFFF;0x0000FF"),
        Err(Error::TextOutOfBounds)
    );
    assert!(written(&scanout).is_empty());
    assert_eq!(
        painter.execute("TEXT;ABC;big;600;10;0xFFFFFF;0x0000FF"),
        Ok(Outcome::Complete)
    );
}

#[test]
fn random_filled_rects() {
    let mut rng = SmallRng::seed_from_u64(11181981);
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());

    for _ in 0..50 {
        let (xa, xb) = (rng.gen_range(0..WIDTH), rng.gen_range(0..WIDTH));
        let (ya, yb) = (rng.gen_range(0..HEIGHT), rng.gen_range(0..HEIGHT));
        let (x0, x1) = (xa.min(xb), xa.max(xb));
        let (y0, y1) = (ya.min(yb), ya.max(yb));
        let cmd = format!("RECT;{};{};{};{};0xC0FFEE;fill", x0, y0, x1, y1);

        painter.reset();
        painter.execute(&cmd).unwrap();
        let cells = written(&scanout);
        assert_eq!(cells.len(), (x1 - x0 + 1) * (y1 - y0 + 1), "{}", cmd);
        assert!(cells.iter().all(|&(x, y, p)| {
            p == 0xC0FFEE && x0 <= x && x <= x1 && y0 <= y && y <= y1
        }));
    }
}

#[test]
fn random_lines() {
    let mut rng = SmallRng::seed_from_u64(11181981);
    let mut fb = framebuffer();
    let (mut painter, scanout) = fb.split(Config::default());

    for _ in 0..100 {
        let horizontal = rng.gen::<bool>();
        let (a, b, fixed) = if horizontal {
            (
                rng.gen_range(0..WIDTH),
                rng.gen_range(0..WIDTH),
                rng.gen_range(0..HEIGHT),
            )
        } else {
            (
                rng.gen_range(0..HEIGHT),
                rng.gen_range(0..HEIGHT),
                rng.gen_range(0..WIDTH),
            )
        };
        let cmd = if horizontal {
            format!("LINE;{};{};{};{};7", a, fixed, b, fixed)
        } else {
            format!("LINE;{};{};{};{};7", fixed, a, fixed, b)
        };

        painter.reset();
        painter.execute(&cmd).unwrap();
        let cells = written(&scanout);
        let span = if a > b { a - b } else { b - a };
        assert_eq!(cells.len(), span + 1, "{}", cmd);
        for &(x, y, _) in &cells {
            let perpendicular = if horizontal { y } else { x };
            assert_eq!(perpendicular, fixed, "{}", cmd);
        }
    }
}

/// Counts transfers and keeps the last frame.
#[derive(Default)]
struct Display {
    frame: Vec<Pixel>,
    transfers: usize,
}

impl TransferEngine for Display {
    fn reset(&mut self) {}

    fn start(&mut self, frame: &[Pixel]) {
        self.frame = frame.to_vec();
        self.transfers += 1;
    }

    fn resend(&mut self) {
        self.transfers += 1;
    }

    fn acknowledge(&mut self) {}
}

#[test]
fn display_sees_each_command_once_complete() {
    let mut fb = framebuffer();
    let (mut painter, mut scanout) = fb.split(Config::default());
    let mut display = Display::default();
    scanout.start(&mut display);

    painter.write(b"TEXT;Ok!;small;0;0;0xFFFFFF;0\n").unwrap();
    scanout.service_interrupt(&mut display);
    painter.write(b"RECT;0;10;639;479;0x333333;fill\n").unwrap();
    scanout.service_interrupt(&mut display);
    scanout.stop(&mut display);

    assert_eq!(display.transfers, 3);
    assert_eq!(scanout.skipped(), 0);
    assert!(display.frame == snapshot(&scanout));
    assert_eq!(display.frame[10 * WIDTH], 0x333333);
    assert_eq!(display.frame[PIXELS - 1], 0x333333);
}

#[test]
fn teardown_returns_cleared_buffer() {
    let mut fb = framebuffer();
    {
        let (mut painter, _) = fb.split(Config::default());
        painter.execute("RECT;0;0;639;479;0xFFFFFFFF;fill").unwrap();
        painter.reset();
    }
    let buf = fb.into_inner();
    assert_eq!(buf.len(), PIXELS);
    assert!(buf.iter().all(|&p| p == 0));
}
