use crate::ParseWindowGeometryError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Size, dock state and position of the viewer window.
///
/// Persisted as five space-separated integers: `width height dock x y`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
    /// REAPER dock state, 0 means floating.
    pub dock: i32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 475,
            height: 200,
            dock: 0,
            x: 0,
            y: 0,
        }
    }
}

impl Display for WindowGeometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.width, self.height, self.dock, self.x, self.y
        )
    }
}

impl FromStr for WindowGeometry {
    type Err = ParseWindowGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = s.split_whitespace().map(|v| {
            v.parse::<i32>()
                .map_err(|_| ParseWindowGeometryError::new("value is not an integer"))
        });
        let mut next = || {
            values
                .next()
                .ok_or(ParseWindowGeometryError::new("expected 5 values"))?
        };
        let geometry = WindowGeometry {
            width: next()?,
            height: next()?,
            dock: next()?,
            x: next()?,
            y: next()?,
        };
        if values.next().is_some() {
            return Err(ParseWindowGeometryError::new("expected 5 values"));
        }
        if geometry.width <= 0 || geometry.height <= 0 {
            return Err(ParseWindowGeometryError::new("size must be positive"));
        }
        Ok(geometry)
    }
}
