pub mod palindrome;
pub mod permutations;
pub mod reverse;
pub mod substring;
