//! Special character suffix selection.

/// Groups overlaid on the tail of a password.
///
/// Reordering or editing this table changes every derived password that uses
/// special characters.
pub const SPECIAL_CHARACTER_GROUPS: [&str; 6] =
    ["`~]'", "!&^#", ")(*$", "[ -=", "@%.;", "<,}+"];

/// Length of every group in [`SPECIAL_CHARACTER_GROUPS`].
pub const SUFFIX_LEN: usize = 4;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Count vowels (`a e i o u y`, any case) in `full`.
pub fn vowel_count(full: &str) -> usize {
    full.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Pick the group for a full digest string.
///
/// The index is the vowel count modulo the table size, so an empty or
/// vowel-free string picks the first group.
pub fn select_suffix(full: &str) -> &'static str {
    SPECIAL_CHARACTER_GROUPS[vowel_count(full) % SPECIAL_CHARACTER_GROUPS.len()]
}
