//! The [`CoreError`] type: caller errors against the grid and run contract.

use std::fmt;

use crate::geom::Coord;

/// Errors surfaced by the grid model and the run entry point.
///
/// All variants are misuse of the API by the caller. Search outcomes such as
/// "no path" or "cancelled" are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Grid rows or pixel width are not positive, or the integer cell size
    /// `width / rows` would be zero.
    InvalidDimension { rows: i32, width: i32 },
    /// A coordinate lookup fell outside the grid.
    OutOfBounds(Coord),
    /// A run was requested without a valid start/end pair.
    InvalidRunRequest(&'static str),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, width } => {
                write!(f, "invalid grid dimension: {rows} rows over {width} pixels")
            }
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
            Self::InvalidRunRequest(why) => write!(f, "invalid run request: {why}"),
        }
    }
}

impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = CoreError::InvalidDimension { rows: 0, width: 800 };
        assert_eq!(e.to_string(), "invalid grid dimension: 0 rows over 800 pixels");
        let e = CoreError::OutOfBounds(Coord::new(9, -1));
        assert_eq!(e.to_string(), "coordinate (9, -1) is outside the grid");
        let e = CoreError::InvalidRunRequest("end not set");
        assert_eq!(e.to_string(), "invalid run request: end not set");
    }

    #[test]
    fn boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(CoreError::OutOfBounds(Coord::new(0, 0)));
        assert!(boxed.to_string().contains("outside"));
    }
}
