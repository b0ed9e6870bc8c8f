//! Produces the solver's binary input files.
//!
//! Each input field in [`INPUT_FIELDS`] is looked up in the run
//! configuration, resolved through the data specifier interpreter and
//! written as one sequential record to `<output_dir>/<key>.bin`.

pub mod inputs;
pub mod writer;

pub use inputs::{find_input, InputField, INPUT_FIELDS};
pub use writer::{generate_input_files, generate_input_files_with, WrittenInput};
