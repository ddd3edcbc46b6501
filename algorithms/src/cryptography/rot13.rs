use super::{shift_letter, Mode};

/// Caesar with a fixed key of 13. Self-inverse, so `mode` does not change
/// the output.
pub fn rot13(text: &str, _mode: Mode) -> String {
    text.chars().map(|c| shift_letter(c, 13)).collect()
}
