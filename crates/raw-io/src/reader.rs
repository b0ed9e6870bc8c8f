//! Reading solver output back into consumer axis order.

use crate::error::{RawIoError, RawIoResult};
use crate::naming::infer_stored_shape;
use crate::record::read_record;
use ndarray::Array3;
use std::path::Path;
use tracing::debug;

/// Read an output file dumped by the solver.
///
/// Each file holds one array whose size depends on what it contains and on
/// the run's resolution, so `nx`, `ny`, `layers` and the file name suffice to
/// interpret it. The stored array is `(layers, ny + dy, nx + dx)` with the
/// last axis varying fastest; the result has its axes reversed to
/// `(nx + dx, ny + dy, layers)` so that it is indexed `[i, j, k]`.
pub fn interpret_raw_file<P: AsRef<Path>>(
    name: P,
    nx: usize,
    ny: usize,
    layers: usize,
) -> RawIoResult<Array3<f64>> {
    let path = name.as_ref();
    let shape = infer_stored_shape(path, nx, ny, layers);
    let values = read_record(path)?;

    if values.len() != shape.len() {
        return Err(RawIoError::ShapeMismatch {
            file: path.to_path_buf(),
            expected: vec![shape.layers, shape.rows, shape.cols],
            found: values.len(),
        });
    }

    debug!(
        file = %path.display(),
        layers = shape.layers,
        rows = shape.rows,
        cols = shape.cols,
        "Interpreted raw output file"
    );

    let stored = Array3::from_shape_vec(shape.dims(), values)
        .map_err(|e| RawIoError::corrupt(path, e.to_string()))?;
    Ok(stored.reversed_axes())
}
