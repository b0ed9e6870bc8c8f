//! Generated field data.

use ndarray::{Array1, Array3, ArrayView2, Axis};
use raw_io::{write_array, RawIoResult};
use std::path::Path;

/// Result of resolving a requested field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    /// Gridded field shaped `(layers, rows, cols)`: rows follow y, columns follow x.
    Gridded(Array3<f64>),
    /// Time series indexed by time step.
    Series(Array1<f64>),
}

impl FieldData {
    /// Dimensions, outermost first.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Gridded(a) => a.shape().to_vec(),
            Self::Series(s) => vec![s.len()],
        }
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Gridded(a) => a.len(),
            Self::Series(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_gridded(&self) -> Option<&Array3<f64>> {
        match self {
            Self::Gridded(a) => Some(a),
            Self::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&Array1<f64>> {
        match self {
            Self::Series(s) => Some(s),
            Self::Gridded(_) => None,
        }
    }

    /// One layer viewed in `(x, y)` index order.
    ///
    /// Returns `None` for series and out-of-range layers.
    pub fn layer_xy(&self, layer: usize) -> Option<ArrayView2<'_, f64>> {
        let grid = self.as_gridded()?;
        if layer >= grid.len_of(Axis(0)) {
            return None;
        }
        Some(grid.index_axis(Axis(0), layer).reversed_axes())
    }

    /// Iterate over all values in storage order.
    pub fn values(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Self::Gridded(a) => Box::new(a.iter().copied()),
            Self::Series(s) => Box::new(s.iter().copied()),
        }
    }

    /// Write as a single solver record.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> RawIoResult<()> {
        match self {
            Self::Gridded(a) => write_array(path, a),
            Self::Series(s) => write_array(path, s),
        }
    }
}

/// Write `field` to `path` as a single solver record.
pub fn write_field<P: AsRef<Path>>(path: P, field: &FieldData) -> RawIoResult<()> {
    field.write_to(path)
}
