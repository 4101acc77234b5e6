#![forbid(unsafe_code)]

//! Snapshot testing and assertion helpers for formcraft forms.
//!
//! - **Snapshot testing**: renders a form to HTML, breaks it into one tag per
//!   line, and compares against stored `.snap` files.
//! - **Assertions**: contains / not-contains checks on rendered forms and
//!   fields, and pass / fail / error-count checks on validation.
//!
//! # Quick Start
//!
//! ```ignore
//! use formcraft_harness::assert_snapshot;
//!
//! #[test]
//! fn signup_form_renders() {
//!     let mut form = signup_form();
//!     assert_snapshot!("signup_form", &form.to_html());
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Golden files may be re-indented by hand; whitespace between tags is
//! ignored when comparing. Run tests with `BLESS=1` to create or update them:
//!
//! ```sh
//! BLESS=1 cargo test
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`.

pub mod assertions;

use std::path::{Path, PathBuf};

pub use assertions::{
    assert_error_count, assert_html_contains, assert_html_not_contains, assert_in_order,
    assert_validation_fails, assert_validation_fails_on, assert_validation_passes, class_tokens,
    render_field, render_field_with_theme, values,
};

// ============================================================================
// Layout
// ============================================================================

/// Break serialized HTML into one tag boundary per line.
///
/// Output from the markup builder carries no whitespace between tags, so
/// splitting at `><` gives stable, diffable lines without reparsing.
#[must_use]
pub fn pretty_html(html: &str) -> String {
    html.replace("><", ">\n<")
}

/// Markup with line breaks and indentation between tags removed.
///
/// Hand-indented snapshots compare equal to the builder's compact output.
#[must_use]
pub fn compact_html(html: &str) -> String {
    html.lines().map(str::trim).collect()
}

// ============================================================================
// Mismatch Report
// ============================================================================

/// Lines of context shown before the first differing tag.
const CONTEXT_LINES: usize = 3;

/// Describe where `actual` first departs from `expected`, tag by tag.
///
/// Both inputs are compacted and re-split with [`pretty_html`]. Returns
/// `None` when they are the same markup.
#[must_use]
pub fn first_difference(expected: &str, actual: &str) -> Option<String> {
    let expected = pretty_html(&compact_html(expected));
    let actual = pretty_html(&compact_html(actual));
    let want: Vec<&str> = expected.lines().collect();
    let got: Vec<&str> = actual.lines().collect();

    let at = (0..want.len().max(got.len())).find(|&i| want.get(i) != got.get(i))?;
    let mut report = String::new();
    for line in &want[at.saturating_sub(CONTEXT_LINES)..at] {
        report.push_str("  ");
        report.push_str(line);
        report.push('\n');
    }
    report.push_str(&format!(
        "- {}\n+ {}\n(tag {} of {} expected, {} rendered)",
        want.get(at).copied().unwrap_or("<end of snapshot>"),
        got.get(at).copied().unwrap_or("<end of output>"),
        at + 1,
        want.len(),
        got.len(),
    ));
    Some(report)
}

// ============================================================================
// Golden Files
// ============================================================================

/// `<crate>/tests/snapshots/<name>.snap`.
#[must_use]
pub fn snapshot_file(manifest_dir: &str, name: &str) -> PathBuf {
    Path::new(manifest_dir)
        .join("tests")
        .join("snapshots")
        .join(name)
        .with_extension("snap")
}

fn blessing() -> bool {
    matches!(std::env::var("BLESS").as_deref(), Ok("1" | "true"))
}

/// Compare rendered HTML with the golden file `name`.
///
/// With `BLESS=1` the file is (re)written from `html`, one tag per line.
///
/// # Panics
///
/// When the golden file is missing or holds different markup.
#[track_caller]
pub fn assert_html_snapshot(name: &str, html: &str, manifest_dir: &str) {
    let path = snapshot_file(manifest_dir, name);

    if blessing() {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("create snapshot directory");
        }
        std::fs::write(&path, pretty_html(html) + "\n").expect("write snapshot");
        return;
    }

    let golden = match std::fs::read_to_string(&path) {
        Ok(golden) => golden,
        Err(e) => panic!(
            "snapshot {name:?} unreadable at {} ({e}); run with BLESS=1 to record:\n{}",
            path.display(),
            pretty_html(html)
        ),
    };
    if let Some(report) = first_difference(&golden, html) {
        panic!(
            "rendered HTML differs from snapshot {name:?} ({}); BLESS=1 re-records it\n{report}",
            path.display()
        );
    }
}

// ============================================================================
// Convenience Macros
// ============================================================================

/// Assert that HTML matches the golden file `tests/snapshots/<name>.snap`
/// of the calling crate.
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $html:expr) => {
        $crate::assert_html_snapshot($name, $html, env!("CARGO_MANIFEST_DIR"))
    };
}

/// Assert that a form's rendered markup contains `needle`.
#[macro_export]
macro_rules! assert_form_contains {
    ($form:expr, $needle:expr) => {
        $crate::assert_html_contains(&$form.to_html(), $needle, "form")
    };
}

/// Assert that a form's rendered markup does not contain `needle`.
#[macro_export]
macro_rules! assert_form_not_contains {
    ($form:expr, $needle:expr) => {
        $crate::assert_html_not_contains(&$form.to_html(), $needle, "form")
    };
}

/// Assert that a field's rendered form group contains `needle`.
#[macro_export]
macro_rules! assert_field_contains {
    ($field:expr, $needle:expr) => {
        $crate::assert_html_contains(&$crate::render_field(&mut $field), $needle, "field")
    };
}

/// Assert that a field's rendered form group does not contain `needle`.
#[macro_export]
macro_rules! assert_field_not_contains {
    ($field:expr, $needle:expr) => {
        $crate::assert_html_not_contains(&$crate::render_field(&mut $field), $needle, "field")
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("formcraft_harness_{tag}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn write_golden(dir: &Path, name: &str, body: &str) {
        let path = snapshot_file(dir.to_str().unwrap(), name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn pretty_html_splits_tags() {
        assert_eq!(
            pretty_html(r#"<div class="a"><input /><p>x</p></div>"#),
            "<div class=\"a\">\n<input />\n<p>x</p>\n</div>"
        );
        assert_eq!(pretty_html("plain"), "plain");
    }

    #[test]
    fn compact_html_drops_indentation() {
        let indented = "<div>\n  <input />\n  <p>x</p>\n</div>\n";
        assert_eq!(compact_html(indented), "<div><input /><p>x</p></div>");
        assert_eq!(compact_html(&pretty_html("<a><b /></a>")), "<a><b /></a>");
    }

    #[test]
    fn same_markup_has_no_difference() {
        assert!(first_difference("<div>\n  <br />\n</div>", "<div><br /></div>").is_none());
    }

    #[test]
    fn difference_names_first_changed_tag() {
        let report = first_difference(
            "<form>\n<input name=\"a\" />\n<input name=\"b\" />\n</form>",
            r#"<form><input name="a" /><input name="c" /></form>"#,
        )
        .expect("difference");
        assert!(report.contains("  <input name=\"a\" />"));
        assert!(report.contains("- <input name=\"b\" />\n+ <input name=\"c\" />"));
        assert!(report.contains("tag 3 of 4 expected, 4 rendered"));
    }

    #[test]
    fn difference_reports_missing_tail() {
        let report = first_difference("<p>a</p>\n<p>b</p>", "<p>a</p>").expect("difference");
        assert!(report.contains("- <p>b</p>\n+ <end of output>"));
    }

    #[test]
    fn snapshot_file_location() {
        assert_eq!(
            snapshot_file("/crates/demo", "signup"),
            PathBuf::from("/crates/demo/tests/snapshots/signup.snap")
        );
    }

    #[test]
    fn indented_golden_matches() {
        let dir = scratch("match");
        write_golden(&dir, "row", "<div class=\"row\">\n    <div class=\"col\"></div>\n</div>\n");
        assert_html_snapshot("row", r#"<div class="row"><div class="col"></div></div>"#, dir.to_str().unwrap());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "differs from snapshot")]
    fn changed_markup_panics() {
        let dir = scratch("mismatch");
        write_golden(&dir, "para", "<p>y</p>");
        assert_html_snapshot("para", "<p>x</p>", dir.to_str().unwrap());
    }

    #[test]
    #[should_panic(expected = "run with BLESS=1 to record")]
    fn missing_golden_panics() {
        let dir = scratch("missing");
        assert_html_snapshot("nonexistent", "<p></p>", dir.to_str().unwrap());
    }
}
