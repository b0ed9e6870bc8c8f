//! Resolve configured input fields and write them for the solver.

use crate::inputs::{find_input, InputField, INPUT_FIELDS};
use anyhow::{bail, Context, Result};
use field_generators::{interpret_requested_data, DataSpec};
use ocean_common::{FieldShape, ModelConfig};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An input file written by [`generate_input_files`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenInput {
    pub key: &'static str,
    pub path: PathBuf,
    pub shape: FieldShape,
    /// Dimensions of the written array, outermost first
    pub dims: Vec<usize>,
}

/// Write every input field present in `config` to `output_dir/<key>.bin`.
pub fn generate_input_files(config: &ModelConfig, output_dir: &Path) -> Result<Vec<WrittenInput>> {
    generate_input_files_with(config, output_dir, &HashMap::new())
}

/// Like [`generate_input_files`], with native values taking precedence over
/// the configuration for the keys in `overrides`.
pub fn generate_input_files_with(
    config: &ModelConfig,
    output_dir: &Path,
    overrides: &HashMap<&str, DataSpec>,
) -> Result<Vec<WrittenInput>> {
    for key in overrides.keys() {
        if find_input(key).is_none() {
            bail!("Override for unknown input field '{}'", key);
        }
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

    let mut written = Vec::new();
    for field in &INPUT_FIELDS {
        let requested = match overrides.get(field.key) {
            Some(spec) => spec.clone(),
            None if config.contains(field.section, field.key) => configured_spec(config, field)?,
            None => {
                debug!(key = field.key, "Input not configured, skipping");
                continue;
            }
        };
        written.push(write_input(config, output_dir, field, &requested)?);
    }

    info!(count = written.len(), dir = %output_dir.display(), "Wrote input files");
    Ok(written)
}

fn configured_spec(config: &ModelConfig, field: &InputField) -> Result<DataSpec> {
    let text = config
        .get_str(field.section, field.key)
        .with_context(|| format!("Failed to read {}.{}", field.section, field.key))?;
    DataSpec::from_text(&text)
        .with_context(|| format!("Invalid data specifier for {}.{}", field.section, field.key))
}

fn write_input(
    config: &ModelConfig,
    output_dir: &Path,
    field: &InputField,
    requested: &DataSpec,
) -> Result<WrittenInput> {
    let path = output_dir.join(field.file_name());
    let data = interpret_requested_data(requested, field.shape, config)
        .with_context(|| format!("Failed to build {} ({})", field.key, field.shape))?;
    data.write_to(&path)
        .with_context(|| format!("Failed to write {} to {:?}", field.key, path))?;

    let dims = data.shape();
    info!(key = field.key, shape = %field.shape, dims = ?dims, file = %path.display(), "Wrote input");
    Ok(WrittenInput {
        key: field.key,
        path,
        shape: field.shape,
        dims,
    })
}
