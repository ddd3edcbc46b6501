/// Two-pointer swap over characters; whitespace and punctuation are reversed
/// along with letters.
pub fn reverse_string(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() > 1 {
        let (mut left, mut right) = (0, chars.len() - 1);
        while left < right {
            chars.swap(left, right);
            left += 1;
            right -= 1;
        }
    }
    chars.into_iter().collect()
}
