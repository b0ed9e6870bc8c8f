//! Scratch directories for tests that write model input/output files.

/// Creates a temporary run directory with a specific prefix.
///
/// The directory is removed when the returned `TempDir` is dropped.
///
/// # Arguments
///
/// * `prefix` - A prefix for the directory name (e.g., "snapshots_")
pub fn temp_run_dir(prefix: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("Failed to create temporary run directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_run_dir_with_prefix() {
        let dir = temp_run_dir("ocean_run_");
        assert!(dir.path().exists());
        assert!(dir.path().to_string_lossy().contains("ocean_run_"));
    }
}
