//! Substring search and replacement.
//!
//! Equations:
//!   find(t, p)       = [ i : t[i..i+|p|] = p ]        naive, O(|t| * |p|),
//!                      overlapping hits included, char indices
//!   replace(t, p, r) = left-to-right, non-overlapping

pub fn find_substring(text: &str, pattern: &str) -> Vec<usize> {
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    if p.len() > t.len() {
        return vec![];
    }

    let mut res = Vec::new();
    for i in 0..=t.len() - p.len() {
        if (0..p.len()).all(|j| t[i + j] == p[j]) {
            res.push(i);
        }
    }
    res
}

/// An empty `pattern` leaves `text` unchanged.
pub fn replace_substring(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find(pattern) {
        out.push_str(&rest[..at]);
        out.push_str(replacement);
        rest = &rest[at + pattern.len()..];
    }
    out.push_str(rest);
    out
}
