use std::path::Path as FsPath;

use geo::MapCoords;
use geo_types::{Coord, MultiLineString};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::errors::SvgCreationError;
use crate::turtle::{BoundingBox, Drawing};

/// Target surface in device units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Canvas, SvgCreationError> {
        if width > 0.0 && height > 0.0 {
            Ok(Canvas { width, height })
        } else {
            Err(SvgCreationError::InvalidCanvas(width, height))
        }
    }
}

/// An arrangement is a plan for mapping drawing coordinates onto a canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// Scale each axis on its own so the bounding box fills the canvas.
    #[default]
    Stretch,
    /// One scale for both axes (the smaller ratio), centered.
    Fit,
}

/// Per-axis scale factors. An axis with no extent keeps unit scale.
pub fn ratios(bounds: &BoundingBox, canvas: &Canvas) -> (f64, f64) {
    let ratio = |extent: f64, size: f64| if extent > 0.0 { size / extent } else { 1.0 };
    (
        ratio(bounds.width(), canvas.width),
        ratio(bounds.height(), canvas.height),
    )
}

impl Arrangement {
    /// The drawing-to-canvas transform for `bounds`.
    pub fn transform(&self, bounds: &BoundingBox, canvas: &Canvas) -> Affine2<f64> {
        let (xr, yr) = ratios(bounds, canvas);
        let (sx, sy, dx, dy) = match self {
            Arrangement::Stretch => (xr, yr, -bounds.min_x * xr, -bounds.min_y * yr),
            Arrangement::Fit => {
                // Only axes with extent constrain the scale.
                let s = match (bounds.width() > 0.0, bounds.height() > 0.0) {
                    (true, true) => xr.min(yr),
                    (true, false) => xr,
                    (false, true) => yr,
                    (false, false) => 1.0,
                };
                (
                    s,
                    s,
                    (canvas.width - bounds.width() * s) / 2.0 - bounds.min_x * s,
                    (canvas.height - bounds.height() * s) / 2.0 - bounds.min_y * s,
                )
            }
        };
        Affine2::from_matrix_unchecked(Matrix3::new(
            sx, 0.0, dx,
            0.0, sy, dy,
            0.0, 0.0, 1.0,
        ))
    }
}

pub trait ToSvg {
    /// Map the geometry onto the canvas with the given [Arrangement].
    fn arrange(&self, arrangement: Arrangement, canvas: &Canvas) -> MultiLineString<f64>;

    /// Convert the arranged geometry into SVG path data, one subpath per stroke.
    fn to_path_data(&self, arrangement: Arrangement, canvas: &Canvas) -> Data;

    /// A complete document sized to the canvas.
    fn to_document(&self, arrangement: Arrangement, canvas: &Canvas) -> Document;
}

impl ToSvg for Drawing {
    fn arrange(&self, arrangement: Arrangement, canvas: &Canvas) -> MultiLineString<f64> {
        let transformation = arrangement.transform(&self.bounds, canvas);
        self.paths.map_coords(|coord| {
            let pt = transformation * NPoint2::new(coord.x, coord.y);
            Coord { x: pt.x, y: pt.y }
        })
    }

    fn to_path_data(&self, arrangement: Arrangement, canvas: &Canvas) -> Data {
        let mut svg_data = Data::new();
        for tline in self.arrange(arrangement, canvas).iter() {
            let mut coords = tline.coords();
            let Some(first) = coords.next() else {
                continue;
            };
            svg_data = svg_data.move_to((first.x, first.y));
            for c in coords {
                svg_data = svg_data.line_to((c.x, c.y));
            }
        }
        svg_data
    }

    fn to_document(&self, arrangement: Arrangement, canvas: &Canvas) -> Document {
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", "black")
            .set("stroke-width", 1)
            .set("d", self.to_path_data(arrangement, canvas));
        Document::new()
            .set("viewBox", (0.0, 0.0, canvas.width, canvas.height))
            .set("width", canvas.width)
            .set("height", canvas.height)
            .add(path)
    }
}

pub fn save(path: &FsPath, document: &Document) -> anyhow::Result<()> {
    svg::save(path, document)?;
    Ok(())
}
