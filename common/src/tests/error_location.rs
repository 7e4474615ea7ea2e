use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`.
/// If capture breaks, configuration and request failures lose the pointer to
/// the code that rejected them.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: The line just above the capture
    let previous_line = line!();
    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(location.file.contains("error_location.rs"));
    assert_eq!(location.line, previous_line + 2);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` Display format.
///
/// **BUG THIS CATCHES**: A changed Display impl would make every error message
/// in the client crates lose or garble its location suffix.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::here();

    let formatted = location.to_string();

    assert!(formatted.starts_with('['));
    assert!(formatted.ends_with(']'));
    assert!(formatted.contains("error_location.rs"));
    assert!(formatted.contains(&location.line.to_string()));
    assert_eq!(formatted.matches(':').count(), 2);
}

/// **VALUE**: Proves `#[track_caller]` propagates through `ErrorLocation::here()`.
///
/// **BUG THIS CATCHES**: Without propagation every error would report the line
/// inside `here()` instead of the failing call site.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::here()
    }

    let loc1 = capture_location();
    let loc2 = capture_location();

    assert_eq!(loc1.file, loc2.file);
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
