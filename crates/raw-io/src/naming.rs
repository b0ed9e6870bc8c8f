//! File naming convention for solver output.
//!
//! Output files carry no header, so their shape is inferred from the basename
//! prefix together with the run's resolution. The rules form an ordered
//! decision table: every rule whose prefix matches is applied in order, and
//! later rules override earlier ones. Longer prefixes (`snap.ub`) therefore
//! come after the shorter prefixes they extend (`snap.u`).

use std::path::Path;
use tracing::{debug, warn};

/// One entry of the naming-convention table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingRule {
    /// Basename prefix that selects this rule
    pub prefix: &'static str,
    /// Extra points along x beyond `nx`
    pub dx: usize,
    /// Extra points along y beyond `ny`
    pub dy: usize,
    /// Whether the file holds a single layer regardless of the run's layer count
    pub single_layer: bool,
}

const fn rule(prefix: &'static str, dx: usize, dy: usize, single_layer: bool) -> NamingRule {
    NamingRule {
        prefix,
        dx,
        dy,
        single_layer,
    }
}

/// Naming rules in evaluation order.
pub const NAMING_RULES: [NamingRule; 19] = [
    // Layer thickness and bottom pressure (tracer points, layered)
    rule("snap.BP", 0, 0, false),
    rule("snap.h", 0, 0, false),
    rule("av.h", 0, 0, false),
    rule("debug.dhdt", 0, 0, false),
    // Free surface (tracer points, single layer)
    rule("snap.eta", 0, 0, true),
    rule("snap.eta_new", 0, 0, true),
    rule("snap.eta_star", 0, 0, true),
    rule("av.eta", 0, 0, true),
    // Zonal velocity (u points)
    rule("snap.u", 1, 0, false),
    rule("av.u", 1, 0, false),
    rule("debug.dudt", 1, 0, false),
    rule("snap.ub", 1, 0, true),
    rule("wind_x", 1, 0, true),
    // Meridional velocity (v points)
    rule("snap.v", 0, 1, false),
    rule("av.v", 0, 1, false),
    rule("debug.dvdt", 0, 1, false),
    rule("snap.vb", 0, 1, true),
    rule("wind_y", 0, 1, true),
    // Relative vorticity (corner points)
    rule("snap.zeta", 1, 1, false),
];

/// Layout flags resolved from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLayout {
    pub dx: usize,
    pub dy: usize,
    pub single_layer: bool,
    /// Prefix of the last rule that matched, if any
    pub matched: Option<&'static str>,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            dx: 0,
            dy: 0,
            single_layer: false,
            matched: None,
        }
    }
}

/// Shape of an output array as it is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredShape {
    pub layers: usize,
    pub rows: usize,
    pub cols: usize,
}

impl StoredShape {
    /// Shape as an `(layers, rows, cols)` tuple, outermost first.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.layers, self.rows, self.cols)
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.layers * self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Basename of `name` as text.
pub fn basename(name: &Path) -> String {
    name.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Apply the naming rules to a file basename.
///
/// Names matching no rule fall back to layered tracer points.
pub fn resolve_layout(file_part: &str) -> FileLayout {
    let layout = NAMING_RULES
        .iter()
        .filter(|r| file_part.starts_with(r.prefix))
        .fold(FileLayout::default(), |_, r| FileLayout {
            dx: r.dx,
            dy: r.dy,
            single_layer: r.single_layer,
            matched: Some(r.prefix),
        });

    match layout.matched {
        Some(prefix) => debug!(file = %file_part, prefix, "Matched naming rule"),
        None => warn!(
            file = %file_part,
            "No naming rule matches; assuming layered tracer-point layout"
        ),
    }
    layout
}

/// Infer the stored shape of an output file from its name and the run resolution.
pub fn infer_stored_shape<P: AsRef<Path>>(name: P, nx: usize, ny: usize, layers: usize) -> StoredShape {
    let layout = resolve_layout(&basename(name.as_ref()));
    StoredShape {
        layers: if layout.single_layer { 1 } else { layers },
        rows: ny + layout.dy,
        cols: nx + layout.dx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_prefixes_follow_their_stems() {
        for (i, first) in NAMING_RULES.iter().enumerate() {
            for second in &NAMING_RULES[i + 1..] {
                assert!(
                    !first.prefix.starts_with(second.prefix),
                    "{} must be listed after {}",
                    first.prefix,
                    second.prefix
                );
            }
        }
    }

    #[test]
    fn test_velocity_rules() {
        let u = resolve_layout("snap.u.0000000100");
        assert_eq!((u.dx, u.dy, u.single_layer), (1, 0, false));
        assert_eq!(u.matched, Some("snap.u"));

        let ub = resolve_layout("snap.ub.0000000100");
        assert_eq!((ub.dx, ub.dy, ub.single_layer), (1, 0, true));
        assert_eq!(ub.matched, Some("snap.ub"));

        let vb = resolve_layout("snap.vb.0000000100");
        assert_eq!((vb.dx, vb.dy, vb.single_layer), (0, 1, true));
    }

    #[test]
    fn test_surface_and_vorticity_rules() {
        for name in ["snap.eta.1", "snap.eta_new.1", "snap.eta_star.1", "av.eta.1"] {
            let layout = resolve_layout(name);
            assert!(layout.single_layer, "{} should be single layer", name);
            assert_eq!((layout.dx, layout.dy), (0, 0));
        }

        let zeta = resolve_layout("snap.zeta.0000000010");
        assert_eq!((zeta.dx, zeta.dy, zeta.single_layer), (1, 1, false));

        let wind = resolve_layout("wind_y.bin");
        assert_eq!((wind.dx, wind.dy, wind.single_layer), (0, 1, true));
    }

    #[test]
    fn test_unmatched_name_defaults_to_layered_tracer() {
        let layout = resolve_layout("mystery.0001");
        assert_eq!(layout, FileLayout::default());
        assert_eq!(infer_stored_shape("mystery.0001", 4, 3, 2).dims(), (2, 3, 4));
    }

    #[test]
    fn test_directory_components_are_ignored() {
        let shape = infer_stored_shape("output/snap.u/snap.h.0001", 10, 8, 3);
        assert_eq!(shape.dims(), (3, 8, 10));
    }
}
