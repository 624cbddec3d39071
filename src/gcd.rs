//! Greatest common divisor, Euclid's way
//!
//! The ither wee exercise in the collection: `gcd(12, 16)` an' friends.

/// Greatest common divisor o' twa integers
///
/// Works on absolute values an' returns unsigned, so even
/// `gcd(i64::MIN, 0)` has a representable answer. `gcd(0, 0)` is 0 by
/// convention.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// Least common multiple, or `None` when it doesnae fit in a u64
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }

    let g = gcd(a, b);
    (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())
}
