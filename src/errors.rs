use std::fmt;

/// Failures while walking a turtle over a symbol string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurtleError {
    /// A `]` arrived with no matching `[`. `index` is the char offset of
    /// the offending symbol in the walked string.
    PoppedEmptyStack { index: usize },
}

impl std::error::Error for TurtleError {}

impl fmt::Display for TurtleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TurtleError::PoppedEmptyStack { index } => write!(
                f,
                "Popping from an empty turtle stack at symbol {}.",
                index
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SvgCreationError {
    InvalidCanvas(f64, f64),
}

impl std::error::Error for SvgCreationError {}

impl fmt::Display for SvgCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvgCreationError::InvalidCanvas(w, h) => {
                write!(f, "Canvas must have a positive size, got {}x{}", w, h)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = TurtleError::PoppedEmptyStack { index: 7 };
        assert_eq!(err.to_string(), "Popping from an empty turtle stack at symbol 7.");
        let err = SvgCreationError::InvalidCanvas(0.0, 10.0);
        assert!(err.to_string().contains("0x10"));
    }
}
