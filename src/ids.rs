//! Identifier generation shared by items and notifications.
//!
//! Identifiers are opaque: they exist only to be compared for equality, so
//! nothing in the crate parses them back apart from [`is_valid_id`].

use uuid::Uuid;

/// Returns a fresh random identifier in canonical UUID v4 form.
///
/// The value is 128 random bits (minus the fixed version and variant
/// nibbles) rendered as lowercase, dash-separated hex. No collision check is
/// performed against identifiers already in use.
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Returns `true` when `candidate` has the canonical UUID v4 shape.
///
/// Matches `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` where `y` is one of
/// `8`, `9`, `a` or `b`. Upper-case hex digits are accepted.
#[must_use]
pub fn is_valid_id(candidate: &str) -> bool {
    const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

    let groups: Vec<&str> = candidate.split('-').collect();
    if groups.len() != GROUP_LENGTHS.len() {
        return false;
    }
    let shape_ok = groups
        .iter()
        .zip(GROUP_LENGTHS)
        .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()));
    if !shape_ok {
        return false;
    }

    let leading = |index: usize| groups.get(index).and_then(|group| group.chars().next());
    let version_ok = leading(2) == Some('4');
    let variant_ok =
        leading(3).is_some_and(|c| matches!(c.to_ascii_lowercase(), '8' | '9' | 'a' | 'b'));
    version_ok && variant_ok
}
