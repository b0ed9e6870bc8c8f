//! The library of named field generators.
//!
//! Every generator takes the grid context, the number of layers the target
//! field carries and a list of arguments, and returns a field shaped
//! `(layers, rows, cols)` on its grid location (or a 1-D series).

use crate::error::{GeneratorError, GeneratorResult};
use crate::field::FieldData;
use crate::value::GeneratorArg;
use ndarray::{Array1, Array3};
use ocean_common::{Grid, Stagger, TimeAxis};
use tracing::debug;

/// Inputs shared by every generator call.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub grid: &'a Grid,
    /// Time stepping of the run, if configured
    pub time: Option<TimeAxis>,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, time: None }
    }

    pub fn with_time(grid: &'a Grid, time: TimeAxis) -> Self {
        Self {
            grid,
            time: Some(time),
        }
    }
}

pub const TRACER_POINT_VARIABLE: &str = "tracer_point_variable";
pub const U_POINT_VARIABLE: &str = "u_point_variable";
pub const V_POINT_VARIABLE: &str = "v_point_variable";
pub const TIME_SERIES_VARIABLE: &str = "time_series_variable";
pub const F_PLANE_F_U: &str = "f_plane_f_u";
pub const F_PLANE_F_V: &str = "f_plane_f_v";
pub const BETA_PLANE_F_U: &str = "beta_plane_f_u";
pub const BETA_PLANE_F_V: &str = "beta_plane_f_v";
pub const RECTANGULAR_POOL: &str = "rectangular_pool";

// ============================================================================
// Point variables
// ============================================================================

/// Per-layer constants or functions evaluated at tracer points, `(layers, ny, nx)`.
pub fn tracer_point_variable(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    point_variable(TRACER_POINT_VARIABLE, Stagger::Tracer, ctx.grid, field_layers, args)
}

/// Per-layer constants or functions evaluated at u points, `(layers, ny, nx + 1)`.
pub fn u_point_variable(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    point_variable(U_POINT_VARIABLE, Stagger::U, ctx.grid, field_layers, args)
}

/// Per-layer constants or functions evaluated at v points, `(layers, ny + 1, nx)`.
pub fn v_point_variable(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    point_variable(V_POINT_VARIABLE, Stagger::V, ctx.grid, field_layers, args)
}

fn point_variable(
    name: &str,
    stagger: Stagger,
    grid: &Grid,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    if args.len() != field_layers {
        return Err(GeneratorError::argument_count(name, field_layers, args.len()));
    }

    let (xs, ys) = grid.axes_for(stagger);
    let mut field = Array3::<f64>::zeros((field_layers, ys.len(), xs.len()));

    for (k, arg) in args.iter().enumerate() {
        let mut layer = field.index_axis_mut(ndarray::Axis(0), k);
        match arg {
            GeneratorArg::Number(value) => layer.fill(*value),
            GeneratorArg::Function(f) => {
                for ((j, i), cell) in layer.indexed_iter_mut() {
                    *cell = f(xs[i], ys[j]);
                }
            }
            GeneratorArg::SeriesFunction(_) => {
                return Err(GeneratorError::ArgumentTypeError {
                    generator: name.to_string(),
                    index: k,
                    expected: "a number or a function of (x, y)",
                })
            }
        }
    }

    debug!(generator = name, layers = field_layers, rows = ys.len(), cols = xs.len(), "Generated point variable");
    Ok(FieldData::Gridded(field))
}

/// A series of `nTimeSteps` values from a single constant or series function.
pub fn time_series_variable(
    ctx: &GeneratorContext<'_>,
    _field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    let name = TIME_SERIES_VARIABLE;
    let time = ctx.time.ok_or_else(|| GeneratorError::MissingTimeAxis {
        generator: name.to_string(),
    })?;
    if args.len() != 1 {
        return Err(GeneratorError::argument_count(name, 1, args.len()));
    }

    let series = match &args[0] {
        GeneratorArg::Number(value) => Array1::from_elem(time.n_time_steps, *value),
        GeneratorArg::SeriesFunction(f) => {
            let values = f(time.n_time_steps, time.dt);
            if values.len() != time.n_time_steps {
                return Err(GeneratorError::ShapeMismatch {
                    origin: format!("{} function output", name),
                    expected: vec![time.n_time_steps],
                    found: values.len(),
                });
            }
            Array1::from(values)
        }
        GeneratorArg::Function(_) => {
            return Err(GeneratorError::ArgumentTypeError {
                generator: name.to_string(),
                index: 0,
                expected: "a number or a function of (nTimeSteps, dt)",
            })
        }
    };

    debug!(generator = name, steps = time.n_time_steps, "Generated time series");
    Ok(FieldData::Series(series))
}

// ============================================================================
// Coriolis parameter and masks
// ============================================================================

fn require_single_layer(name: &str, field_layers: usize) -> GeneratorResult<()> {
    if field_layers != 1 {
        return Err(GeneratorError::SingleLayerOnly {
            generator: name.to_string(),
            field_layers,
        });
    }
    Ok(())
}

/// Check the argument count and that every argument is a plain number.
fn numeric_args<const N: usize>(name: &str, args: &[GeneratorArg]) -> GeneratorResult<[f64; N]> {
    if args.len() != N {
        return Err(GeneratorError::argument_count(name, N, args.len()));
    }
    let mut out = [0.0; N];
    for (index, (slot, arg)) in out.iter_mut().zip(args).enumerate() {
        match arg {
            GeneratorArg::Number(v) => *slot = *v,
            _ => {
                return Err(GeneratorError::ArgumentTypeError {
                    generator: name.to_string(),
                    index,
                    expected: "a number",
                })
            }
        }
    }
    Ok(out)
}

fn uniform(grid: &Grid, stagger: Stagger, value: f64) -> FieldData {
    let (rows, cols) = grid.extent(stagger);
    FieldData::Gridded(Array3::from_elem((1, rows, cols), value))
}

fn beta_plane(grid: &Grid, stagger: Stagger, f0: f64, beta: f64) -> FieldData {
    let (xs, ys) = grid.axes_for(stagger);
    FieldData::Gridded(Array3::from_shape_fn((1, ys.len(), xs.len()), |(_, j, _)| {
        f0 + beta * ys[j]
    }))
}

/// f-plane Coriolis parameter at u points: uniform `f0`.
pub fn f_plane_f_u(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    require_single_layer(F_PLANE_F_U, field_layers)?;
    let [f0] = numeric_args::<1>(F_PLANE_F_U, args)?;
    Ok(uniform(ctx.grid, Stagger::U, f0))
}

/// f-plane Coriolis parameter at v points: uniform `f0`.
pub fn f_plane_f_v(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    require_single_layer(F_PLANE_F_V, field_layers)?;
    let [f0] = numeric_args::<1>(F_PLANE_F_V, args)?;
    Ok(uniform(ctx.grid, Stagger::V, f0))
}

/// beta-plane Coriolis parameter at u points: `f0 + beta * y`.
pub fn beta_plane_f_u(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    require_single_layer(BETA_PLANE_F_U, field_layers)?;
    let [f0, beta] = numeric_args::<2>(BETA_PLANE_F_U, args)?;
    Ok(beta_plane(ctx.grid, Stagger::U, f0, beta))
}

/// beta-plane Coriolis parameter at v points: `f0 + beta * yp1`.
pub fn beta_plane_f_v(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    require_single_layer(BETA_PLANE_F_V, field_layers)?;
    let [f0, beta] = numeric_args::<2>(BETA_PLANE_F_V, args)?;
    Ok(beta_plane(ctx.grid, Stagger::V, f0, beta))
}

/// Wet mask of the largest rectangular basin with closed walls.
///
/// Ones everywhere except a one-cell border of zeros on all four sides.
pub fn rectangular_pool(
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    require_single_layer(RECTANGULAR_POOL, field_layers)?;
    numeric_args::<0>(RECTANGULAR_POOL, args)?;

    let (ny, nx) = ctx.grid.extent(Stagger::Tracer);
    let mask = Array3::from_shape_fn((1, ny, nx), |(_, j, i)| {
        if j == 0 || i == 0 || j == ny - 1 || i == nx - 1 {
            0.0
        } else {
            1.0
        }
    });
    Ok(FieldData::Gridded(mask))
}
