use super::{letter_base, Mode};

/// Mirrors each ASCII letter within its alphabet (A<->Z, b<->y).
/// Self-inverse; both modes produce the same output.
pub fn atbash(text: &str, _mode: Mode) -> String {
    text.chars()
        .map(|c| match letter_base(c) {
            Some(base) => (base + 25 - (c as u8 - base)) as char,
            None => c,
        })
        .collect()
}
