//! A small catalog of classic curves. Every preset draws with `f`; any other
//! letters are markers that only steer the rewriting.

use super::{Grammar, RuleTable};

pub fn koch_curve() -> Grammar {
    Grammar::new(RuleTable::new().with_rule('f', "f+f-f-f+f"), "f", 90.0)
        .with_name("Koch curve")
        .with_iterations(4)
}

pub fn koch_island() -> Grammar {
    Grammar::new(
        RuleTable::new().with_rule('f', "f+f-f-ff+f+f-f"),
        "f+f+f+f",
        90.0,
    )
    .with_name("Quadratic Koch island")
    .with_iterations(3)
}

pub fn sierpinski_arrowhead() -> Grammar {
    Grammar::new(
        RuleTable::new()
            .with_rule('x', "yf+xf+y")
            .with_rule('y', "xf-yf-x"),
        "yf",
        60.0,
    )
    .with_name("Sierpinski arrowhead")
    .with_iterations(6)
}

pub fn hilbert() -> Grammar {
    Grammar::new(
        RuleTable::new()
            .with_rule('x', "-yf+xfx+fy-")
            .with_rule('y', "+xf-yfy-fx+"),
        "x",
        90.0,
    )
    .with_name("Hilbert curve")
    .with_iterations(5)
}

pub fn dragon() -> Grammar {
    Grammar::new(
        RuleTable::new()
            .with_rule('x', "x+yf+")
            .with_rule('y', "-fx-y"),
        "fx",
        90.0,
    )
    .with_name("Dragon curve")
    .with_iterations(10)
}

pub fn plant() -> Grammar {
    Grammar::new(
        RuleTable::new()
            .with_rule('x', "f+[[x]-x]-f[-fx]+x")
            .with_rule('f', "ff"),
        "x",
        25.0,
    )
    .with_name("Fractal plant")
    .with_iterations(5)
}

pub fn gosper() -> Grammar {
    Grammar::new(
        RuleTable::new()
            .with_rule('x', "x+yf++yf-fx--fxfx-yf+")
            .with_rule('y', "-fx+yfyf++yf+fx--fx-y"),
        "xf",
        60.0,
    )
    .with_name("Gosper curve")
    .with_iterations(4)
}

/// Every preset, in display order.
pub fn all() -> Vec<Grammar> {
    vec![
        koch_curve(),
        koch_island(),
        sierpinski_arrowhead(),
        hilbert(),
        dragon(),
        plant(),
        gosper(),
    ]
}

/// Case-insensitive lookup by display name.
pub fn by_name(name: &str) -> Option<Grammar> {
    all().into_iter().find(|g| g.is_named(name))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let names: HashSet<String> = all()
            .iter()
            .map(|g| g.name().expect("presets are named").to_string())
            .collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_all_render() {
        for g in all() {
            let drawing = g
                .compute_default()
                .expect("presets have balanced brackets")
                .expect("presets have an iteration count");
            assert!(!drawing.paths.0.is_empty(), "{:?}", g.name());
            assert!(drawing.bounds.width() > 0.0 || drawing.bounds.height() > 0.0);
        }
    }

    #[test]
    fn test_koch_endpoint() {
        let drawing = koch_curve().compute(1).unwrap();
        let last = *drawing.paths.0[0].0.last().unwrap();
        assert!((last.x - 3.0).abs() < 0.0001);
        assert!(last.y.abs() < 0.0001);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("hilbert CURVE"), Some(hilbert()));
        assert_eq!(by_name("nope"), None);
    }
}
