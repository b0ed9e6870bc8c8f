//! Resolve a requested field into data.

use crate::error::{GeneratorError, GeneratorResult};
use crate::field::FieldData;
use crate::generators::{self, GeneratorContext};
use crate::registry;
use crate::specifier::DataSpec;
use crate::value::GeneratorArg;
use ndarray::{Array1, Array3};
use ocean_common::{field_layers, FieldShape, Grid, ModelConfig, OceanError, Stagger, TimeAxis};
use std::path::Path;
use tracing::debug;

/// Interpret a textual data specifier for a field of `shape`.
pub fn interpret_requested_text(
    text: &str,
    shape: FieldShape,
    config: &ModelConfig,
) -> GeneratorResult<FieldData> {
    interpret_requested_data(&DataSpec::from_text(text)?, shape, config)
}

/// Interpret a requested field for `shape` on the grid described by `config`.
///
/// Registered generators and native values are evaluated on the grid. Paths
/// are read as one raw record whose length must match the shape.
pub fn interpret_requested_data(
    requested: &DataSpec,
    shape: FieldShape,
    config: &ModelConfig,
) -> GeneratorResult<FieldData> {
    let grid = config.grid()?;
    let time = config.time_axis()?;
    let ctx = GeneratorContext { grid: &grid, time };

    let layers = match shape {
        FieldShape::TimeSeries => 1,
        gridded => field_layers(gridded, &grid)?,
    };

    match requested {
        DataSpec::Generator { name, args } => {
            let args: Vec<GeneratorArg> = args.iter().copied().map(GeneratorArg::Number).collect();
            registry::invoke(name, &ctx, layers, &args)
        }
        DataSpec::Path(path) => read_raw_input(path, shape, &grid, time, layers),
        DataSpec::Layers(values) => {
            let generator: registry::GeneratorFn = match shape.stagger() {
                Some(Stagger::Tracer) => generators::tracer_point_variable,
                Some(Stagger::U) => generators::u_point_variable,
                Some(Stagger::V) => generators::v_point_variable,
                _ => {
                    return Err(OceanError::UnsupportedShape(format!(
                        "per-layer values cannot fill a '{}' field",
                        shape
                    ))
                    .into())
                }
            };
            let args: Vec<GeneratorArg> = values.iter().cloned().map(GeneratorArg::from).collect();
            generator(&ctx, layers, &args)
        }
        DataSpec::Series(value) => {
            if shape != FieldShape::TimeSeries {
                return Err(OceanError::UnsupportedShape(format!(
                    "a time series cannot fill a '{}' field",
                    shape
                ))
                .into());
            }
            generators::time_series_variable(&ctx, layers, &[GeneratorArg::from(value.clone())])
        }
    }
}

fn read_raw_input(
    path: &Path,
    shape: FieldShape,
    grid: &Grid,
    time: Option<TimeAxis>,
    layers: usize,
) -> GeneratorResult<FieldData> {
    let values = raw_io::read_record(path)?;
    let mismatch = |expected: Vec<usize>, found: usize| GeneratorError::ShapeMismatch {
        origin: path.display().to_string(),
        expected,
        found,
    };

    let field = match shape {
        FieldShape::TimeSeries => {
            let time = time.ok_or_else(|| GeneratorError::MissingTimeAxis {
                generator: format!("raw series '{}'", path.display()),
            })?;
            if values.len() != time.n_time_steps {
                return Err(mismatch(vec![time.n_time_steps], values.len()));
            }
            FieldData::Series(Array1::from(values))
        }
        gridded => {
            let (rows, cols) = gridded.extent(grid)?;
            let found = values.len();
            let data = Array3::from_shape_vec((layers, rows, cols), values)
                .map_err(|_| mismatch(vec![layers, rows, cols], found))?;
            FieldData::Gridded(data)
        }
    };

    debug!(file = %path.display(), shape = %shape, dims = ?field.shape(), "Loaded raw input");
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ModelConfig {
        ModelConfig::from_yaml_str(
            "grid:\n  nx: 4\n  ny: 3\n  layers: 2\n  dx: 1.0\n  dy: 1.0\nnumerics:\n  nTimeSteps: 6\n  dt: 10.0\n",
        )
        .unwrap()
    }

    #[test]
    fn test_specifier_dispatch() {
        let field = interpret_requested_text(":u_point_variable:1,2", FieldShape::U3d, &config()).unwrap();
        assert_eq!(field.shape(), vec![2, 3, 5]);
    }

    #[test]
    fn test_layer_count_follows_shape() {
        let err = interpret_requested_text(":tracer_point_variable:1,2", FieldShape::Tracer2d, &config())
            .unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::ArgumentCountMismatch { expected: 1, found: 2, .. }
        ));
    }

    #[test]
    fn test_native_values_reject_wrong_shape() {
        let err = interpret_requested_data(&DataSpec::constants(&[1.0]), FieldShape::TimeSeries, &config())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Ocean(OceanError::UnsupportedShape(_))));

        let series = DataSpec::Series(1.0.into());
        let err = interpret_requested_data(&series, FieldShape::U2d, &config()).unwrap_err();
        assert!(matches!(err, GeneratorError::Ocean(OceanError::UnsupportedShape(_))));
    }

    #[test]
    fn test_missing_grid_key() {
        let config = ModelConfig::from_yaml_str("grid:\n  nx: 4\n").unwrap();
        let err = interpret_requested_text(":rectangular_pool:", FieldShape::Tracer2d, &config).unwrap_err();
        assert!(matches!(err, GeneratorError::Ocean(OceanError::MissingKey { .. })));
    }
}
