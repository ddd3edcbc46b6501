/// Trial division by every d in 2..=floor(sqrt(n)).
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    let mut d: u64 = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
