//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: Writes each author's [`crate::models::ExtractionResult`] to a JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! ├── jane.json
//! └── sameeruddinmohammed.json
//! ```

pub mod json;
