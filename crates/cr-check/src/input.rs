//! Coercion of textual check arguments into magnitudes.

use crate::character::CharacterStore;

/// Resolve an attribute argument to a magnitude.
///
/// A string of ASCII digits is read literally. Anything else is looked up
/// as a skill on the sheet of `identity`. Every failure yields 0, which the
/// classifiers reject as an invalid magnitude.
pub fn resolve_magnitude(
    arg: &str,
    identity: Option<&str>,
    characters: &dyn CharacterStore,
) -> i64 {
    let arg = arg.trim();
    if arg.is_empty() {
        return 0;
    }
    if arg.bytes().all(|b| b.is_ascii_digit()) {
        return arg.parse().unwrap_or(0);
    }
    let Some(identity) = identity else {
        return 0;
    };
    characters.skill_value(identity, arg).unwrap_or_else(|e| {
        tracing::debug!(identity, skill = arg, error = %e, "skill lookup failed");
        0
    })
}

/// Parse a difficulty argument.
pub fn parse_difficulty(arg: &str) -> Option<i64> {
    arg.trim().parse().ok()
}
