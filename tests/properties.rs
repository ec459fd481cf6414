// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks over generated paths. The generator is seeded so
//! failures reproduce.

use pathmark::{
    Border, Command, CommandAddress, Coords, Editor, EditorConfig, Handle, History, Path, Point,
    Segment, Vec2,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_0f_9a7e;
const ROUNDS: usize = 200;

struct Runner<R> {
    rng: R,
}

impl Runner<StdRng> {
    fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(SEED),
        }
    }
}

impl<R: Rng> Runner<R> {
    /// A coordinate in `0..100` with one decimal place.
    fn coord(&mut self) -> f64 {
        f64::from(self.rng.random_range(0..1000_i32)) / 10.
    }

    /// A small signed offset.
    fn delta(&mut self) -> f64 {
        f64::from(self.rng.random_range(-300..300_i32)) / 10.
    }

    fn vector(&mut self) -> Vec2 {
        Vec2::new(self.delta(), self.delta())
    }

    fn flag(&mut self) -> u8 {
        u8::from(self.rng.random::<bool>())
    }

    /// One command with arguments. Relative commands use small offsets,
    /// absolute ones stay within `0..100`.
    fn command(&mut self, allow_relative: bool) -> String {
        let letter = b"MLHVCSQTAZ"[self.rng.random_range(0..10)];
        let relative = allow_relative && self.rng.random::<bool>();
        let mut out = String::new();
        out.push(if relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        } as char);
        let arity = match letter {
            b'Z' => 0,
            b'H' | b'V' => 1,
            b'M' | b'L' | b'T' => 2,
            b'S' | b'Q' => 4,
            b'C' => 6,
            _ => 7,
        };
        for i in 0..arity {
            let value = match (letter, i) {
                (b'A', 0 | 1) => f64::from(self.rng.random_range(1..500_i32)) / 10.,
                (b'A', 2) => f64::from(self.rng.random_range(0..360_i32)),
                (b'A', 3 | 4) => f64::from(self.flag()),
                _ if relative => self.delta(),
                _ => self.coord(),
            };
            out.push(' ');
            out.push_str(&value.to_string());
        }
        out
    }

    fn path(&mut self, allow_relative: bool) -> String {
        let mut d = format!("M {} {}", self.coord(), self.coord());
        for _ in 0..self.rng.random_range(1..12) {
            d.push(' ');
            d.push_str(&self.command(allow_relative));
        }
        d
    }
}

fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} is not within {tolerance} of {expected}"
    );
}

#[test]
fn serialization_round_trips() {
    let mut runner = Runner::new();
    for _ in 0..ROUNDS {
        let d = runner.path(true);
        let path = Path::parse(&d).unwrap();
        let text = path.to_string();
        let reparsed = Path::parse(&text).unwrap();
        assert_eq!(reparsed.to_string(), text, "from {d}");
        assert_eq!(reparsed, path, "from {d}");
    }
}

/// Drop every space the grammar allows dropping, and separate the
/// remaining number pairs with commas.
fn compact(d: &str) -> String {
    let mut out = String::new();
    let mut prev_number = false;
    for word in d.split(' ') {
        let number = !word.starts_with(|c: char| c.is_ascii_alphabetic());
        if number && prev_number {
            out.push(',');
        }
        out.push_str(word);
        prev_number = number;
    }
    out
}

#[test]
fn compact_and_spaced_forms_agree() {
    let mut runner = Runner::new();
    for _ in 0..ROUNDS {
        let d = runner.path(true);
        let compact = compact(&d);
        assert_eq!(
            Path::parse(&compact).unwrap().to_string(),
            Path::parse(&d).unwrap().to_string()
        );
    }
}

#[test]
fn closed_shapes_end_at_their_start() {
    let mut runner = Runner::new();
    for _ in 0..ROUNDS {
        let d = runner.path(true);
        let path = Path::parse(&d).unwrap();
        for shape in path.shapes() {
            for (i, command) in shape.commands().iter().enumerate() {
                if i > 0 {
                    assert_eq!(command.start(), shape.commands()[i - 1].end());
                }
                if command.is_close_path() {
                    assert_eq!(command.start(), command.end());
                    assert_eq!(i, shape.len() - 1);
                }
            }
            if shape.is_closed() {
                assert_eq!(shape.end(), shape.start());
            }
        }
    }
}

#[test]
fn arc_center_lies_on_both_end_points() {
    let mut runner = Runner::new();
    let mut checked = 0;
    for _ in 0..ROUNDS {
        let d = format!("M {} {} {}", runner.coord(), runner.coord(), {
            let mut arc = runner.command(false);
            while !arc.starts_with('A') {
                arc = runner.command(false);
            }
            arc
        });
        let path = Path::parse(&d).unwrap();
        let Some(arc) = path.shapes()[0].commands()[1].as_arc() else {
            unreachable!("generated an arc");
        };
        let Coords { start, end } = arc.coords();
        if start == end {
            continue;
        }
        let radii = arc.effective_radii();
        assert!(radii.x >= arc.rx().abs() - 1e-9);
        let (sin, cos) = arc.x_axis_rotation().to_radians().sin_cos();
        for pt in [start, end] {
            let d = pt - arc.center();
            let x = cos * d.x + sin * d.y;
            let y = -sin * d.x + cos * d.y;
            let on_ellipse = (x * x) / (radii.x * radii.x) + (y * y) / (radii.y * radii.y);
            assert_near(on_ellipse, 1., 1e-6);
        }
        checked += 1;
    }
    assert!(checked > ROUNDS / 2);
}

#[test]
fn relative_commands_keep_their_offsets() {
    let d = "M 10 10 L 20 20 l 5 5 h 3 v 2 c 1 1 2 2 3 3 s 1 1 2 2 q 1 1 2 2 t 1 1 a 5 5 0 0 1 4 4 z";
    let mut runner = Runner::new();
    let original = Path::parse(d).unwrap();
    let deltas: Vec<Vec2> = original.shapes()[0]
        .commands()
        .iter()
        .map(|c| c.end() - c.start())
        .collect();
    for _ in 0..ROUNDS {
        let mut path = original.clone();
        let v = runner.vector();
        path.update_shape(0, |shape| {
            shape.update(1, |c| c.move_end_point(v, None)).unwrap()
        })
        .unwrap()
        .unwrap();
        let shape = &path.shapes()[0];
        let relative = shape.commands().iter().enumerate().skip(2);
        for (i, command) in relative.filter(|(_, c)| !c.is_close_path()) {
            assert_eq!(
                command.to_string(),
                original.shapes()[0].commands()[i].to_string()
            );
            let delta = command.end() - command.start();
            assert_near(delta.x, deltas[i].x, 1e-9);
            assert_near(delta.y, deltas[i].y, 1e-9);
        }
        assert!(shape.commands()[2].start().is_near(Point::new(20., 20.) + v, 1e-9));
    }
}

#[test]
fn rejected_edits_leave_the_document_unchanged() {
    let border = Border::new(0., 0., 100., 100.);
    let handles = [
        Handle::EndPoint,
        Handle::StartControl,
        Handle::EndControl,
        Handle::RadiusX,
        Handle::RadiusY,
        Handle::Whole,
    ];
    let mut runner = Runner::new();
    let mut rejected = 0;
    for _ in 0..ROUNDS {
        let mut editor = Editor::with_border(EditorConfig::default(), border);
        editor.load(&runner.path(false)).unwrap();
        assert!(editor.path().is_inside_border(&border));
        editor.drag_start();
        for _ in 0..10 {
            let path = editor.path();
            let shape = runner.rng.random_range(0..path.len());
            let len = path.shapes()[shape].len();
            let address = match runner.rng.random_range(0..=len) {
                i if i == len => CommandAddress::whole_shape(shape),
                i => CommandAddress::new(shape, i),
            };
            let handle = handles[runner.rng.random_range(0..handles.len())];
            let before = editor.d();
            match editor.drag(address, handle, runner.vector()) {
                Ok(true) => assert!(editor.path().is_inside_border(&border)),
                Ok(false) => {
                    rejected += 1;
                    assert_eq!(editor.d(), before);
                }
                Err(_) => assert_eq!(editor.d(), before),
            }
        }
        editor.drag_end();
        assert!(editor.path().is_inside_border(&border));
    }
    assert!(rejected > 0);
}

#[test]
fn history_stays_bounded() {
    let mut runner = Runner::new();
    for max in 1..8 {
        let mut history = History::new(max);
        for step in 0..ROUNDS {
            match runner.rng.random_range(0..4) {
                0 => {
                    history.undo();
                }
                1 => {
                    history.redo();
                }
                _ => {
                    history.commit_str(&format!("M {step} 0"));
                }
            }
            assert!(history.len() <= max);
            assert!(history.cursor() < history.len());
        }
    }
}

#[test]
fn commands_own_their_border_points() {
    let mut runner = Runner::new();
    for _ in 0..ROUNDS {
        let path = Path::parse(&runner.path(true)).unwrap();
        for (_, command) in path.commands() {
            let points = command.owned_points();
            match command {
                Command::ClosePath(_) => assert!(points.is_empty()),
                Command::CurveTo(_) => assert_eq!(points.len(), 3),
                Command::SmoothCurveTo(_) | Command::QuadraticCurveTo(_) => {
                    assert_eq!(points.len(), 2);
                }
                _ => assert_eq!(points.as_slice(), [command.end()]),
            }
        }
    }
}
