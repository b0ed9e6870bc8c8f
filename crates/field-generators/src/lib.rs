//! Field generators and the data specifier interpreter.
//!
//! A requested input field may be a path to a raw record, a generator
//! specifier such as `:beta_plane_f_u:1.0e-5,2.0e-11`, or native per-layer
//! constants and functions. [`interpret_requested_data`] resolves any of
//! these into a [`FieldData`] on the run's staggered grid.
//!
//! Gridded results are shaped `(layers, rows, cols)`, with rows following y
//! and columns following x. Use [`FieldData::layer_xy`] for an `(x, y)` view.

pub mod error;
pub mod field;
pub mod generators;
pub mod interpret;
pub mod registry;
pub mod specifier;
pub mod value;

pub use error::{GeneratorError, GeneratorResult};
pub use field::{write_field, FieldData};
pub use generators::GeneratorContext;
pub use interpret::{interpret_requested_data, interpret_requested_text};
pub use registry::{generator_names, invoke, is_registered, GeneratorFn};
pub use specifier::{parse_specifier, DataSpec};
pub use value::{GeneratorArg, LayerValue, SeriesFn, SeriesValue, SpatialFn};
