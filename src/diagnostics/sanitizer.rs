// SPDX-License-Identifier: MPL-2.0
//! Message sanitization.
//!
//! Failure messages can embed file paths (feed location, config directory).
//! Those are replaced with a placeholder before an event is stored.

use std::sync::LazyLock;

use regex::Regex;

static PATH_PATTERNS: LazyLock<Regex> = LazyLock::new(|| {
    // Path continues until whitespace or a common string delimiter.
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|/tmp/[^\s"'()\[\]]+"#,
        r#"|/var/[^\s"'()\[\]]+"#,
        r#"|/etc/[^\s"'()\[\]]+"#,
        r#"|/opt/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#"|\\\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .expect("path regex should compile")
});

/// Replaces file paths in `message` with `<path>`.
///
/// # Examples
///
/// ```
/// use mealbox_console::diagnostics::sanitize_message;
///
/// let msg = "Failed to read /home/ops/feeds/today.json";
/// assert_eq!(sanitize_message(msg), "Failed to read <path>");
///
/// assert_eq!(sanitize_message("Duplicate notification id: 4"), "Duplicate notification id: 4");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    PATH_PATTERNS.replace_all(message, "<path>").into_owned()
}
