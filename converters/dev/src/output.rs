//! Output normalization utilities for test comparisons.

/// Removes trailing whitespace from each line, and trailing blank lines.
///
/// Expected fixtures are edited by hand, and editors disagree about trailing
/// whitespace and the final newline. Neither is significant in the rendered output.
///
/// # Example
///
/// ```
/// use mdlite_converters_dev::output::remove_lines_trailing_whitespace;
///
/// let input = "line1   \nline2\t\nline3\n\n";
/// let normalized = remove_lines_trailing_whitespace(input);
/// assert_eq!(normalized, "line1\nline2\nline3");
/// ```
#[must_use]
pub fn remove_lines_trailing_whitespace(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
