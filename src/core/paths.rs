//! Output path derivation
//!
//! The invoice file sits next to the input and shares its base name.

use std::path::{Path, PathBuf};

/// Extension of the generated invoice file
pub const OUTPUT_EXTENSION: &str = "txt";

/// Normalize a path to use '/' as separator (for stable log and error output)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Derive the output path: same directory and stem, extension replaced with `txt`.
/// An input without an extension gets `.txt` appended.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Check whether two paths name the same file, falling back to a literal
/// comparison when either side does not exist yet
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
