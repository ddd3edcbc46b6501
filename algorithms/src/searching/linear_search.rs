/// Scans the whole slice and reports the **last** index holding `target`.
///
/// Every other search returns the first hit its narrowing reaches; callers
/// that rely on this one returning the last duplicate keep working.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    for (i, v) in arr.iter().enumerate() {
        if v == target {
            found = Some(i);
        }
    }
    found
}
