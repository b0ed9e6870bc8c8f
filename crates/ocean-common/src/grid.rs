//! Staggered grid geometry for the layered ocean model.
//!
//! The model uses an Arakawa C-grid. Scalars (layer thickness, free surface)
//! live at cell centres, `u` velocities on the west/east cell faces, `v`
//! velocities on the south/north faces and vorticity on the cell corners.

use crate::error::{OceanError, OceanResult};
use serde::{Deserialize, Serialize};

/// Location of a field on the staggered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stagger {
    /// Cell centres: (x, y)
    Tracer,
    /// West/east faces: (xp1, y)
    U,
    /// South/north faces: (x, yp1)
    V,
    /// Cell corners: (xp1, yp1)
    Vorticity,
}

impl Stagger {
    /// Extra points this location carries beyond (nx, ny), as (dx, dy).
    pub fn offsets(&self) -> (usize, usize) {
        match self {
            Stagger::Tracer => (0, 0),
            Stagger::U => (1, 0),
            Stagger::V => (0, 1),
            Stagger::Vorticity => (1, 1),
        }
    }
}

/// Construction parameters of a [`Grid`], its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub nx: usize,
    pub ny: usize,
    pub layers: usize,
    pub dx: f64,
    pub dy: f64,
    #[serde(default)]
    pub x0: f64,
    #[serde(default)]
    pub y0: f64,
}

/// Immutable description of a model grid and its derived axes.
///
/// Deserializing validates the parameters and rebuilds the axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParams", into = "GridParams")]
pub struct Grid {
    nx: usize,
    ny: usize,
    layers: usize,
    dx: f64,
    dy: f64,
    x0: f64,
    y0: f64,
    /// Vertex coordinates in x (length nx + 1)
    xp1: Vec<f64>,
    /// Vertex coordinates in y (length ny + 1)
    yp1: Vec<f64>,
    /// Cell-centre coordinates in x (length nx)
    x: Vec<f64>,
    /// Cell-centre coordinates in y (length ny)
    y: Vec<f64>,
}

impl Grid {
    /// Create a grid anchored at the origin.
    pub fn new(nx: usize, ny: usize, layers: usize, dx: f64, dy: f64) -> OceanResult<Self> {
        Self::with_origin(nx, ny, layers, dx, dy, 0.0, 0.0)
    }

    /// Create a grid whose first vertex sits at `(x0, y0)`.
    pub fn with_origin(
        nx: usize,
        ny: usize,
        layers: usize,
        dx: f64,
        dy: f64,
        x0: f64,
        y0: f64,
    ) -> OceanResult<Self> {
        for (param, value) in [("nx", nx), ("ny", ny), ("layers", layers)] {
            if value < 1 {
                return Err(OceanError::invalid_parameter(
                    param,
                    format!("must be at least 1, got {}", value),
                ));
            }
        }
        for (param, value) in [("dx", dx), ("dy", dy)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OceanError::invalid_parameter(
                    param,
                    format!("must be a positive finite number, got {}", value),
                ));
            }
        }
        for (param, value) in [("x0", x0), ("y0", y0)] {
            if !value.is_finite() {
                return Err(OceanError::invalid_parameter(
                    param,
                    format!("must be finite, got {}", value),
                ));
            }
        }

        let xp1 = vertex_axis(x0, dx, nx);
        let yp1 = vertex_axis(y0, dy, ny);
        let x = midpoints(&xp1);
        let y = midpoints(&yp1);

        Ok(Self {
            nx,
            ny,
            layers,
            dx,
            dy,
            x0,
            y0,
            xp1,
            yp1,
            x,
            y,
        })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Number of active density layers.
    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.x0, self.y0)
    }

    /// Tracer-point x coordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Tracer-point y coordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Vertex x coordinates.
    pub fn xp1(&self) -> &[f64] {
        &self.xp1
    }

    /// Vertex y coordinates.
    pub fn yp1(&self) -> &[f64] {
        &self.yp1
    }

    /// The (x-like, y-like) coordinate axes used at a grid location.
    pub fn axes_for(&self, stagger: Stagger) -> (&[f64], &[f64]) {
        match stagger {
            Stagger::Tracer => (&self.x, &self.y),
            Stagger::U => (&self.xp1, &self.y),
            Stagger::V => (&self.x, &self.yp1),
            Stagger::Vorticity => (&self.xp1, &self.yp1),
        }
    }

    /// Array extent `(rows, cols)` of one layer at a grid location.
    ///
    /// Rows run along y and columns along x, so a tracer field is `(ny, nx)`.
    pub fn extent(&self, stagger: Stagger) -> (usize, usize) {
        let (dx, dy) = stagger.offsets();
        (self.ny + dy, self.nx + dx)
    }

    /// Number of horizontal points at a grid location.
    pub fn point_count(&self, stagger: Stagger) -> usize {
        let (rows, cols) = self.extent(stagger);
        rows * cols
    }
}

impl TryFrom<GridParams> for Grid {
    type Error = OceanError;

    fn try_from(p: GridParams) -> OceanResult<Self> {
        Grid::with_origin(p.nx, p.ny, p.layers, p.dx, p.dy, p.x0, p.y0)
    }
}

impl From<Grid> for GridParams {
    fn from(grid: Grid) -> Self {
        Self {
            nx: grid.nx,
            ny: grid.ny,
            layers: grid.layers,
            dx: grid.dx,
            dy: grid.dy,
            x0: grid.x0,
            y0: grid.y0,
        }
    }
}

fn vertex_axis(origin: f64, spacing: f64, cells: usize) -> Vec<f64> {
    (0..=cells).map(|i| origin + i as f64 * spacing).collect()
}

fn midpoints(vertices: &[f64]) -> Vec<f64> {
    vertices.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}
