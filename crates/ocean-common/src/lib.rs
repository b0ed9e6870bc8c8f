//! Common types shared by the layered ocean model I/O crates.
//!
//! - [`Grid`]: staggered C-grid geometry and derived coordinate axes
//! - [`FieldShape`]: where a field lives and how many layers it carries
//! - [`ModelConfig`]: read-only run configuration loaded from YAML

pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod shape;

pub use config::{LoggingConfig, ModelConfig, TimeAxis};
pub use error::{OceanError, OceanResult};
pub use grid::{Grid, GridParams, Stagger};
pub use logging::init_tracing;
pub use shape::{field_layers, FieldShape};
