//! Field shape tags and the layer/extent rules derived from them.

use crate::error::{OceanError, OceanResult};
use crate::grid::{Grid, Stagger};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a field lives on the staggered grid and whether it is depth-resolved.
///
/// Serialized as its configuration tag (`"2dT"`, `"time"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldShape {
    /// `2dT`: single-layer tracer field (free surface, depth, wet mask)
    Tracer2d,
    /// `3dT`: per-layer tracer field (layer thickness)
    Tracer3d,
    /// `2dU`: single-layer u-point field (zonal wind, f at u points)
    U2d,
    /// `3dU`: per-layer u-point field
    U3d,
    /// `2dV`: single-layer v-point field
    V2d,
    /// `3dV`: per-layer v-point field
    V3d,
    /// `time`: 1-D series indexed by time step
    TimeSeries,
}

impl FieldShape {
    pub const ALL: [FieldShape; 7] = [
        FieldShape::Tracer2d,
        FieldShape::Tracer3d,
        FieldShape::U2d,
        FieldShape::U3d,
        FieldShape::V2d,
        FieldShape::V3d,
        FieldShape::TimeSeries,
    ];

    /// Short tag used in configuration tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tracer2d => "2dT",
            Self::Tracer3d => "3dT",
            Self::U2d => "2dU",
            Self::U3d => "3dU",
            Self::V2d => "2dV",
            Self::V3d => "3dV",
            Self::TimeSeries => "time",
        }
    }

    /// Grid location of the field, or `None` for a time series.
    pub fn stagger(&self) -> Option<Stagger> {
        match self {
            Self::Tracer2d | Self::Tracer3d => Some(Stagger::Tracer),
            Self::U2d | Self::U3d => Some(Stagger::U),
            Self::V2d | Self::V3d => Some(Stagger::V),
            Self::TimeSeries => None,
        }
    }

    /// Whether the field carries one value per layer.
    pub fn is_layered(&self) -> bool {
        matches!(self, Self::Tracer3d | Self::U3d | Self::V3d)
    }

    /// Horizontal `(rows, cols)` extent of one layer of this field.
    pub fn extent(&self, grid: &Grid) -> OceanResult<(usize, usize)> {
        self.stagger()
            .map(|stagger| grid.extent(stagger))
            .ok_or_else(|| OceanError::UnsupportedShape(self.to_string()))
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldShape {
    type Err = OceanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| OceanError::UnknownShapeTag(s.to_string()))
    }
}

impl TryFrom<String> for FieldShape {
    type Error = OceanError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<FieldShape> for String {
    fn from(shape: FieldShape) -> Self {
        shape.as_str().to_string()
    }
}

/// Number of layers a field of the given shape carries on `grid`.
///
/// Time series have no layer dimension and yield `UnsupportedShape`.
pub fn field_layers(shape: FieldShape, grid: &Grid) -> OceanResult<usize> {
    match shape {
        FieldShape::TimeSeries => Err(OceanError::UnsupportedShape(format!(
            "{} has no layer dimension",
            shape
        ))),
        s if s.is_layered() => Ok(grid.layers()),
        _ => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layers() {
        let grid = Grid::new(4, 4, 3, 1.0, 1.0).unwrap();
        assert_eq!(field_layers(FieldShape::Tracer2d, &grid).unwrap(), 1);
        assert_eq!(field_layers(FieldShape::U2d, &grid).unwrap(), 1);
        assert_eq!(field_layers(FieldShape::V2d, &grid).unwrap(), 1);
        assert_eq!(field_layers(FieldShape::Tracer3d, &grid).unwrap(), 3);
        assert_eq!(field_layers(FieldShape::U3d, &grid).unwrap(), 3);
        assert_eq!(field_layers(FieldShape::V3d, &grid).unwrap(), 3);
        assert!(matches!(
            field_layers(FieldShape::TimeSeries, &grid),
            Err(OceanError::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_serde_uses_tags() {
        let shapes: Vec<FieldShape> = serde_yaml::from_str("[2dT, 3dU, time]").unwrap();
        assert_eq!(shapes, vec![FieldShape::Tracer2d, FieldShape::U3d, FieldShape::TimeSeries]);
        assert_eq!(serde_yaml::to_string(&FieldShape::V3d).unwrap().trim(), "3dV");
        assert!(serde_yaml::from_str::<FieldShape>("Tracer2d").is_err());
    }

    #[test]
    fn test_parse_tags() {
        for shape in FieldShape::ALL {
            assert_eq!(shape.as_str().parse::<FieldShape>().unwrap(), shape);
        }
        assert!(matches!(
            "4dT".parse::<FieldShape>(),
            Err(OceanError::UnknownShapeTag(ref tag)) if tag == "4dT"
        ));
        assert!("2dt".parse::<FieldShape>().is_err());
    }

    #[test]
    fn test_extent() {
        let grid = Grid::new(10, 8, 2, 1.0, 1.0).unwrap();
        assert_eq!(FieldShape::Tracer3d.extent(&grid).unwrap(), (8, 10));
        assert_eq!(FieldShape::U2d.extent(&grid).unwrap(), (8, 11));
        assert_eq!(FieldShape::V3d.extent(&grid).unwrap(), (9, 10));
        assert!(FieldShape::TimeSeries.extent(&grid).is_err());
    }
}
