//! Frozen name → generator lookup table.

use crate::error::{GeneratorError, GeneratorResult};
use crate::field::FieldData;
use crate::generators::{self, GeneratorContext};
use crate::value::GeneratorArg;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Signature shared by every registered generator.
pub type GeneratorFn =
    fn(&GeneratorContext<'_>, usize, &[GeneratorArg]) -> GeneratorResult<FieldData>;

static REGISTRY: OnceLock<BTreeMap<&'static str, GeneratorFn>> = OnceLock::new();

/// The registered generators, keyed by specifier name.
pub fn registry() -> &'static BTreeMap<&'static str, GeneratorFn> {
    REGISTRY.get_or_init(|| {
        let entries: [(&'static str, GeneratorFn); 9] = [
            (generators::TRACER_POINT_VARIABLE, generators::tracer_point_variable),
            (generators::U_POINT_VARIABLE, generators::u_point_variable),
            (generators::V_POINT_VARIABLE, generators::v_point_variable),
            (generators::TIME_SERIES_VARIABLE, generators::time_series_variable),
            (generators::BETA_PLANE_F_U, generators::beta_plane_f_u),
            (generators::BETA_PLANE_F_V, generators::beta_plane_f_v),
            (generators::F_PLANE_F_U, generators::f_plane_f_u),
            (generators::F_PLANE_F_V, generators::f_plane_f_v),
            (generators::RECTANGULAR_POOL, generators::rectangular_pool),
        ];
        entries.into_iter().collect()
    })
}

/// Names of all registered generators, sorted.
pub fn generator_names() -> impl Iterator<Item = &'static str> {
    registry().keys().copied()
}

/// Whether `name` is a registered generator.
pub fn is_registered(name: &str) -> bool {
    registry().contains_key(name)
}

/// Look up a generator by name.
pub fn lookup(name: &str) -> GeneratorResult<GeneratorFn> {
    registry()
        .get(name)
        .copied()
        .ok_or_else(|| GeneratorError::UnknownGenerator(name.to_string()))
}

/// Run the named generator.
pub fn invoke(
    name: &str,
    ctx: &GeneratorContext<'_>,
    field_layers: usize,
    args: &[GeneratorArg],
) -> GeneratorResult<FieldData> {
    let generator = lookup(name)?;
    debug!(generator = name, field_layers, args = args.len(), "Dispatching generator");
    generator(ctx, field_layers, args)
}
