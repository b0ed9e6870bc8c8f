//! Raw binary record I/O for the layered ocean model.
//!
//! The solver reads its inputs and writes its snapshots as headerless,
//! single-record sequential files of 64-bit floats. This crate provides:
//!
//! - **Record codec**: framing with leading/trailing length markers
//! - **Naming convention**: ordered prefix rules mapping an output file name
//!   to its grid staggering and layer count
//! - **Output reader**: [`interpret_raw_file`] combines both and restores
//!   the `(x, y, layer)` axis order consumers index with
//!
//! # Example
//!
//! ```ignore
//! use raw_io::interpret_raw_file;
//!
//! // u velocity snapshot from a 100 x 200 x 2 run: shape (101, 200, 2)
//! let u = interpret_raw_file("output/snap.u.0000000100", 100, 200, 2)?;
//! ```

pub mod error;
pub mod naming;
pub mod reader;
pub mod record;

pub use error::{RawIoError, RawIoResult};
pub use naming::{infer_stored_shape, resolve_layout, FileLayout, NamingRule, StoredShape, NAMING_RULES};
pub use reader::interpret_raw_file;
pub use record::{read_record, write_array, write_record};
