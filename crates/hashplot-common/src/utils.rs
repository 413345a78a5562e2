//! Path and label helpers shared by both renderers.

/// Characters treated as path separators during label extraction.
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Extension appended to the label to form the saved image name.
pub const OUTPUT_EXTENSION: &str = "png";

/// Derives the plot label from a data file path.
///
/// The label starts just after the first path separator and ends just before
/// the first `.` that follows it, so `results/myhash.txt` gives `myhash`.
///
/// Malformed paths are not rejected:
/// - without a separator the label starts at the beginning of the path;
/// - without a `.` after the separator the label is empty;
/// - for nested paths only the first separator counts (`a/b/c.txt` gives `b/c`).
pub fn extract_label(path: &str) -> String {
    let start = path
        .find(PATH_SEPARATORS)
        .map_or(0, |sep| sep + 1);

    let label = path[start..]
        .find('.')
        .map(|dot| path[start..start + dot].to_string())
        .unwrap_or_default();

    if label.is_empty() {
        tracing::warn!(path, "Could not derive a label from the data file path");
    }
    label
}

/// Builds `{output_dir}{label}.png` by plain concatenation.
///
/// `output_dir` is a prefix: it must already end with a separator,
/// otherwise the directory name and the label run together.
pub fn output_path(output_dir: &str, label: &str) -> String {
    format!("{output_dir}{label}.{OUTPUT_EXTENSION}")
}
