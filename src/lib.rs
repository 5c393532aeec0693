//! Lindenmayer-system curves for plotting
//!
//! Expand a grammar with [`l_system::Grammar`], walk the resulting symbol string
//! with [`turtle::interpret`], and hand the [`turtle::Drawing`] (pen strokes plus
//! bounding box) to whatever draws it. The [`render`] module covers the common
//! case of fitting the drawing onto an SVG canvas.
//!
//! ```
//! use lsys_plot::prelude::*;
//!
//! let drawing = presets::koch_curve().compute(2).unwrap();
//! let doc = drawing.to_document(Arrangement::Stretch, &Canvas::new(300.0, 100.0).unwrap());
//! assert!(doc.to_string().contains("<path"));
//! ```

/// Error types for the turtle and the renderer.
pub mod errors;

/// L-system implementation, with expansion, rule parsing and presets
pub mod l_system;

/// Turtle graphics implementation, including interpretation of L-system strings
pub mod turtle;

/// Scaling drawings onto a canvas and writing SVG
pub mod render;

/// Everything needed to go from a grammar to an SVG document.
pub mod prelude {
    pub use crate::errors::TurtleError;
    pub use crate::l_system::grammar_file::Catalog;
    pub use crate::l_system::{presets, Grammar, RuleTable};
    pub use crate::render::{Arrangement, Canvas, ToSvg};
    pub use crate::turtle::{interpret, BoundingBox, Drawing, Turtle, TurtleTrait};
}
