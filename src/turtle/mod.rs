use geo_types::{coord, Coord, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::TurtleError;

/// Position and heading (radians) of a turtle. Saved on `[` and restored on `]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Coord<f64>,
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        TurtleState {
            position: coord! {x: 0.0, y: 0.0},
            heading: 0.0,
        }
    }
}

/// Axis-aligned extent of everything a turtle visited. Always contains the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn include(&mut self, c: Coord<f64>) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn contains(&self, c: Coord<f64>) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! {x: self.min_x, y: self.min_y},
            coord! {x: self.max_x, y: self.max_y},
        )
    }
}

/// The result of walking a symbol string: disjoint pen strokes plus their extent.
/// Serializes as RON so a computed drawing can be cached or handed to another tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub paths: MultiLineString<f64>,
    pub bounds: BoundingBox,
}

/// # Turtle Module
///
/// Logo-style turtle that records a point for every command it receives, which
/// is what Lindenmayer strings want: branch points land in the stroke exactly
/// once per occurrence.
#[derive(Clone, Debug, Default)]
pub struct Turtle {
    state: TurtleState,
    stack: Vec<TurtleState>,
    lines: Vec<Vec<Coord<f64>>>,
    current: Vec<Coord<f64>>,
    bounds: BoundingBox,
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// TurtleTrait provides turtle related functions for the Turtle struct.
///
/// Commands consume and return the turtle so they chain. `pop` is the only
/// fallible one.
///
/// # Example
///
/// ```
/// use lsys_plot::turtle::{Turtle, TurtleTrait, degrees};
/// let drawing = Turtle::new()
///     .push()
///     .fwd(10.0)
///     .left(degrees(90.0))
///     .fwd(10.0)
///     .pop()
///     .expect("pushed above")
///     .fwd(5.0)
///     .to_drawing();
/// assert_eq!(drawing.paths.0.len(), 2);
/// ```
pub trait TurtleTrait: Sized {
    fn fwd(self, distance: f64) -> Self;
    fn left(self, angle: f64) -> Self;
    fn right(self, angle: f64) -> Self;
    fn push(self) -> Self;
    fn pop(self) -> Result<Self, TurtleError>;
    /// Handles one L-system symbol, `index` being its offset for error reports.
    fn step(self, symbol: char, index: usize, angle: f64, distance: f64) -> Result<Self, TurtleError>;
    fn walk_lpath(self, lpath: &str, angle: f64, distance: f64) -> Result<Self, TurtleError>;
    fn to_multiline(&self) -> MultiLineString<f64>;
    fn to_drawing(self) -> Drawing;
}

impl Turtle {
    pub fn new() -> Turtle {
        Turtle::default()
    }

    pub fn state(&self) -> TurtleState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn mark(&mut self) {
        self.current.push(self.state.position);
    }

    fn close_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }
}

impl TurtleTrait for Turtle {
    fn fwd(mut self, distance: f64) -> Self {
        let heading = self.state.heading;
        self.mark();
        self.state.position = self.state.position
            + coord! {x: distance * heading.cos(), y: distance * heading.sin()};
        self.bounds.include(self.state.position);
        self
    }

    fn left(mut self, angle: f64) -> Self {
        self.mark();
        self.state.heading += angle;
        self
    }

    fn right(mut self, angle: f64) -> Self {
        self.mark();
        self.state.heading -= angle;
        self
    }

    fn push(mut self) -> Self {
        self.mark();
        self.stack.push(self.state);
        self
    }

    fn pop(self) -> Result<Self, TurtleError> {
        self.step(']', 0, 0.0, 0.0)
    }

    fn step(mut self, symbol: char, index: usize, angle: f64, distance: f64) -> Result<Self, TurtleError> {
        Ok(match symbol {
            '[' => self.push(),
            ']' => {
                let Some(saved) = self.stack.pop() else {
                    return Err(TurtleError::PoppedEmptyStack { index });
                };
                self.mark();
                self.close_line();
                self.state = saved;
                self
            }
            '-' => self.right(angle),
            '+' => self.left(angle),
            'f' => self.fwd(distance),
            _ => {
                self.mark();
                self
            }
        })
    }

    fn walk_lpath(mut self, lpath: &str, angle: f64, distance: f64) -> Result<Self, TurtleError> {
        for (index, c) in lpath.chars().enumerate() {
            self = self.step(c, index, angle, distance)?;
        }
        Ok(self)
    }

    fn to_multiline(&self) -> MultiLineString<f64> {
        self.lines
            .iter()
            .map(|line| LineString::from(line.clone()))
            .collect()
    }

    /// Lifts the pen: a pending stroke gets the resting position as its last
    /// point and is closed.
    fn to_drawing(mut self) -> Drawing {
        if !self.current.is_empty() {
            self.mark();
            self.close_line();
        }
        if !self.stack.is_empty() {
            log::debug!("{} unclosed branches at end of walk", self.stack.len());
        }
        Drawing {
            paths: self.lines.into_iter().map(LineString::from).collect(),
            bounds: self.bounds,
        }
    }
}

/// Walks `symbols` with a unit step, turning by `turn_angle_degrees` on `+`/`-`.
///
/// Only `f` moves the turtle. Every symbol, control symbols included, first
/// records the current position into the open stroke. A `]` without a matching
/// `[` fails with [`TurtleError::PoppedEmptyStack`].
///
/// ```
/// use lsys_plot::turtle::interpret;
/// let drawing = interpret("f", 90.0).unwrap();
/// assert_eq!(drawing.paths.0[0].0.len(), 2);
/// assert_eq!(drawing.bounds.max_x, 1.0);
/// ```
pub fn interpret(symbols: &str, turn_angle_degrees: f64) -> Result<Drawing, TurtleError> {
    let drawing = Turtle::new()
        .walk_lpath(symbols, degrees(turn_angle_degrees), 1.0)?
        .to_drawing();
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "interpreted {} symbols into {} paths",
            symbols.chars().count(),
            drawing.paths.0.len()
        );
    }
    Ok(drawing)
}
