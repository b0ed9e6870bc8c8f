//! Native field values and generator arguments.
//!
//! A per-layer value is either a constant or a function of position. These
//! are resolved into [`GeneratorArg`]s once, at the API boundary, and each
//! generator checks the argument kinds it accepts.

use std::fmt;
use std::sync::Arc;

/// Function of the (x, y) coordinates of a grid point.
pub type SpatialFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Function of (number of time steps, step size) returning the whole series.
pub type SeriesFn = Arc<dyn Fn(usize, f64) -> Vec<f64> + Send + Sync>;

/// Value of one layer of a gridded field.
#[derive(Clone)]
pub enum LayerValue {
    Constant(f64),
    Function(SpatialFn),
}

impl LayerValue {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }
}

impl From<f64> for LayerValue {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl fmt::Debug for LayerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Value of a time series.
#[derive(Clone)]
pub enum SeriesValue {
    Constant(f64),
    Function(SeriesFn),
}

impl SeriesValue {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(usize, f64) -> Vec<f64> + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }
}

impl From<f64> for SeriesValue {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl fmt::Debug for SeriesValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Argument passed to a registered generator.
#[derive(Clone)]
pub enum GeneratorArg {
    Number(f64),
    Function(SpatialFn),
    SeriesFunction(SeriesFn),
}

impl GeneratorArg {
    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Function(_) => "function of (x, y)",
            Self::SeriesFunction(_) => "function of (nTimeSteps, dt)",
        }
    }
}

impl fmt::Debug for GeneratorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.debug_tuple("Number").field(v).finish(),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}

impl From<f64> for GeneratorArg {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<LayerValue> for GeneratorArg {
    fn from(value: LayerValue) -> Self {
        match value {
            LayerValue::Constant(v) => Self::Number(v),
            LayerValue::Function(f) => Self::Function(f),
        }
    }
}

impl From<SeriesValue> for GeneratorArg {
    fn from(value: SeriesValue) -> Self {
        match value {
            SeriesValue::Constant(v) => Self::Number(v),
            SeriesValue::Function(f) => Self::SeriesFunction(f),
        }
    }
}
