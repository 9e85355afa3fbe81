//! Shortcode generation and validation.
//!
//! Both functions are pure. Generation makes no uniqueness promise; that is
//! the job of [`crate::application::services::AllocationService`].

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated shortcodes unless configured otherwise.
pub const DEFAULT_SHORTCODE_LENGTH: usize = 6;

/// Shortest accepted shortcode.
pub const MIN_SHORTCODE_LENGTH: usize = 4;

/// Longest accepted shortcode.
pub const MAX_SHORTCODE_LENGTH: usize = 32;

/// Compiled pattern for accepted shortcodes.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{4,32}$").expect("shortcode pattern is valid"));

/// Generates a random shortcode of `length` characters.
///
/// Characters are drawn uniformly from `[a-zA-Z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_shortcode(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_shortcode(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true iff `candidate` is 4-32 ASCII letters or digits.
///
/// No normalization is applied: `"AbCd"` and `"abcd"` are different codes.
pub fn is_valid_shortcode(candidate: &str) -> bool {
    SHORTCODE_REGEX.is_match(candidate)
}
