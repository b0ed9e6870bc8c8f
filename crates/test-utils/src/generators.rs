//! Test data generators for layered grid arrays.
//!
//! These generators create predictable, verifiable patterns that make axis
//! mix-ups visible: every element encodes its own indices.

/// Value stored at `(layer, row, col)` by [`create_indexed_field`].
#[inline]
pub fn indexed_value(layer: usize, row: usize, col: usize) -> f64 {
    (layer * 1_000_000 + col * 1000 + row) as f64
}

/// Creates a layered field with predictable values.
///
/// Each element is `layer * 1_000_000 + col * 1000 + row`, laid out with the
/// layer outermost and columns fastest, i.e. C order for shape
/// `(layers, rows, cols)`.
///
/// # Example
///
/// ```
/// use test_utils::create_indexed_field;
///
/// let data = create_indexed_field(2, 3, 4);
/// assert_eq!(data.len(), 24);
/// assert_eq!(data[1], 1000.0);      // layer 0, row 0, col 1
/// assert_eq!(data[4], 1.0);         // layer 0, row 1, col 0
/// assert_eq!(data[12], 1_000_000.0); // layer 1, row 0, col 0
/// ```
pub fn create_indexed_field(layers: usize, rows: usize, cols: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(layers * rows * cols);
    for layer in 0..layers {
        for row in 0..rows {
            for col in 0..cols {
                data.push(indexed_value(layer, row, col));
            }
        }
    }
    data
}

/// Creates a field whose values are awkward binary fractions, useful for
/// checking that I/O is bit-exact.
pub fn create_irrational_field(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (i as f64 + 1.0).sqrt() * std::f64::consts::PI - 1.0 / 3.0)
        .collect()
}
