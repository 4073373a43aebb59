//! File collaborators: reading inputs, writing containers, deriving output
//! names, and discovering candidate files for the interactive mode.

pub mod discovery;
pub mod operations;

pub use operations::{decrypted_filename, encrypted_filename, is_encrypted_file, output_path, read_file, write_file};
