/// Canvas fitting and SVG output for turtle drawings.
pub mod svg;

pub use self::svg::{save, Arrangement, Canvas, ToSvg};
