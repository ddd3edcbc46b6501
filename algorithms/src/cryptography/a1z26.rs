//! A1Z26: letters as their 1-based alphabet position.
//!
//! Encrypt joins the numbers of one word with `-` and copies whitespace and
//! punctuation as separators:
//!   "the pear." -> "20-8-5 16-5-1-18."
//!
//! Decrypt cuts the text at word boundaries not preceded by `-` and not
//! followed by ` ` or `-`, so each token is one hyphenated number run (with
//! its trailing space) or one punctuation run. Runs become lowercase words
//! joined by single spaces; punctuation closes up onto the preceding word.

use unicode_general_category::{get_general_category, GeneralCategory};

use super::Mode;
use crate::error::{AlgorithmError, Result};

pub fn a1z26(text: &str, mode: Mode) -> Result<String> {
    let out = match mode {
        Mode::Encrypt => encode(text),
        Mode::Decrypt => decode(text)?,
    };
    Ok(out.trim().trim_end_matches('-').to_string())
}

fn encode(text: &str) -> String {
    let mut out = String::new();
    for c in text.to_uppercase().chars() {
        if c.is_ascii_uppercase() {
            out.push_str(&(c as u8 - b'A' + 1).to_string());
            out.push('-');
        } else if c.is_whitespace() || is_punctuation(c) {
            if out.ends_with('-') {
                out.pop();
            }
            out.push(c);
        }
    }
    out
}

fn decode(text: &str) -> Result<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();

    for token in split_tokens(&chars) {
        let token: String = token.iter().collect();
        for part in token.split('-').filter(|p| !p.is_empty()) {
            if let Ok(n) = part.trim().parse::<i64>() {
                out.push(letter_at(n)?);
            }
            for c in part.chars().filter(|&c| is_punctuation(c) && c != '-') {
                if out.ends_with(' ') {
                    out.pop();
                }
                out.push(c);
            }
        }
        out.push(' ');
    }
    Ok(out)
}

fn letter_at(n: i64) -> Result<char> {
    if !(1..=26).contains(&n) {
        return Err(AlgorithmError::Format(format!("a1z26 number {n} outside 1..=26")));
    }
    Ok((b'a' + (n - 1) as u8) as char)
}

/// Splits at every position that is a word boundary, is not preceded by `-`
/// and is not followed by ` ` or `-`. A split at either end yields an empty
/// leading or trailing token.
fn split_tokens(chars: &[char]) -> Vec<&[char]> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for i in 0..=chars.len() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i).copied();
        if is_split_point(prev, next) {
            tokens.push(&chars[start..i]);
            start = i;
        }
    }
    tokens.push(&chars[start..]);
    tokens
}

fn is_split_point(prev: Option<char>, next: Option<char>) -> bool {
    let boundary = prev.is_some_and(is_word_char) != next.is_some_and(is_word_char);
    boundary && prev != Some('-') && !matches!(next, Some(' ' | '-'))
}

fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ConnectorPunctuation
    )
}

fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::OtherPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        split_tokens(&chars).into_iter().map(|t| t.iter().collect()).collect()
    }

    #[test]
    fn tokens_keep_number_runs_with_trailing_space() {
        assert_eq!(tokens("20-8-5 16-5."), vec!["", "20-8-5 ", "16-5", "."]);
    }

    #[test]
    fn tokens_split_punctuation_followed_by_space() {
        assert_eq!(tokens("8-9, 20"), vec!["", "8-9", ", ", "20", ""]);
    }

    #[test]
    fn no_split_inside_hyphen_runs() {
        assert!(!is_split_point(Some('-'), Some('8')));
        assert!(!is_split_point(Some('5'), Some('-')));
        assert!(!is_split_point(Some('5'), Some(' ')));
    }

    #[test]
    fn decode_keeps_comma_on_word() {
        assert_eq!(a1z26("8-9, 20-8-5-18-5", Mode::Decrypt).unwrap(), "hi, there");
    }

    #[test]
    fn encode_drops_digits_and_symbols() {
        assert_eq!(a1z26("a1b$c", Mode::Encrypt).unwrap(), "1-2-3");
    }

    #[test]
    fn decode_rejects_out_of_alphabet_numbers() {
        assert!(matches!(a1z26("27", Mode::Decrypt), Err(AlgorithmError::Format(_))));
    }
}
