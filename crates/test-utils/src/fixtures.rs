//! Common test fixtures for ocean model I/O tests.
//!
//! Configuration documents are plain YAML text so that this crate stays free
//! of workspace dependencies.

/// Grid dimensions used across the test suite.
pub mod grid {
    /// Grid dimensions for testing.
    #[derive(Debug, Clone, Copy)]
    pub struct GridDims {
        pub nx: usize,
        pub ny: usize,
        pub layers: usize,
        pub dx: f64,
        pub dy: f64,
    }

    /// Small non-square grid with two layers, convenient for staggering checks
    pub const SMALL_TWO_LAYER: GridDims = GridDims {
        nx: 10,
        ny: 8,
        layers: 2,
        dx: 1000.0,
        dy: 1000.0,
    };

    /// Single-layer grid used for the rectangular pool mask checks
    pub const POOL_5X4: GridDims = GridDims {
        nx: 5,
        ny: 4,
        layers: 1,
        dx: 1.0,
        dy: 1.0,
    };

    /// Basin-scale grid with 20 km cells
    pub const BASIN_20KM: GridDims = GridDims {
        nx: 100,
        ny: 200,
        layers: 2,
        dx: 2.0e4,
        dy: 2.0e4,
    };
}

/// Configuration documents for testing.
pub mod config {
    use super::grid::GridDims;

    /// Render a minimal run configuration with `grid` and `numerics` sections.
    pub fn run_config_yaml(dims: GridDims, n_time_steps: usize, dt: f64) -> String {
        format!(
            "grid:\n  nx: {}\n  ny: {}\n  layers: {}\n  dx: {:?}\n  dy: {:?}\nnumerics:\n  nTimeSteps: {}\n  dt: {:?}\n",
            dims.nx, dims.ny, dims.layers, dims.dx, dims.dy, n_time_steps, dt
        )
    }

    /// A complete two-layer run with every input family configured.
    pub const TWO_LAYER_RUN: &str = r#"
grid:
  nx: 10
  ny: 8
  layers: 2
  dx: 1000.0
  dy: 1000.0
  fUfile: ":f_plane_f_u:1.0e-4"
  fVfile: ":f_plane_f_v:1.0e-4"
  wetMaskFile: ":rectangular_pool:"
  depthFile: ":tracer_point_variable:4000"
initial_conditions:
  initHfile: ":tracer_point_variable:400,1600"
  initUfile: ":u_point_variable:0,0"
  initEtaFile: ":tracer_point_variable:0"
external_forcing:
  zonalWindFile: ":u_point_variable:0.1"
  wind_mag_time_series_file: ":time_series_variable:1.0"
numerics:
  nTimeSteps: 12
  dt: 600.0
logging:
  level: debug
  format: pretty
"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_config_yaml_contains_sections() {
        let yaml = config::run_config_yaml(grid::SMALL_TWO_LAYER, 5, 60.0);
        assert!(yaml.contains("nx: 10"));
        assert!(yaml.contains("dx: 1000.0"));
        assert!(yaml.contains("nTimeSteps: 5"));
        assert!(yaml.contains("dt: 60.0"));
    }
}
