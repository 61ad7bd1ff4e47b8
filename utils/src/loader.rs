//! This module handles I/O

use std::io;
use std::path::{Path, PathBuf};

/// Directory all resources are resolved against.
pub const RES_DIR: &str = "res";

/// Returns the path of a file relative to the res directory.
pub fn res_path(file_name: &str) -> PathBuf {
    Path::new(RES_DIR).join(file_name)
}

/// Loads a file relative to the res directory as a [`String`] object. This is
/// useful for loading plaintext such as yaml files.
pub fn load_string(file_name: &str) -> io::Result<String> {
    let txt = std::fs::read_to_string(res_path(file_name))?;
    Ok(txt)
}
