//! Custom assertions for normalization testing.

use phonenorm::Normalized;

/// Asserts the shape every normalizer result must have: empty, or
/// starting with `+`.
///
/// # Panics
/// Panics if the value is non-empty and lacks the `+` prefix.
pub fn assert_international_shape(raw: &str, value: &str) {
    assert!(
        value.is_empty() || value.starts_with('+'),
        "Normalizing {:?} produced {:?}, which is neither empty nor '+'-prefixed",
        raw,
        value
    );
}

/// Asserts a normalization result's value and producing stage.
///
/// # Panics
/// Panics with both expected and actual values on mismatch.
pub fn assert_normalized(result: &Normalized, value: &str, stage: phonenorm::Stage) {
    assert_eq!(
        (result.value.as_str(), result.stage),
        (value, stage),
        "unexpected normalization result"
    );
}
