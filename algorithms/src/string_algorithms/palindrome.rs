/// Compares characters pairwise from both ends, ignoring case.
/// Empty and single-character text are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    (0..len / 2).all(|i| chars[i].to_uppercase().eq(chars[len - 1 - i].to_uppercase()))
}
