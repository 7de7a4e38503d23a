//! Gregory-Leibniz series
//!
//! π/4 = 1 - 1/3 + 1/5 - 1/7 + 1/9 - ...
//!
//! Convergence is O(1/n): a million terms buys roughly six correct digits.

use crate::args::TermCount;

/// Approximate π from the first `n` terms of the Leibniz series
#[inline]
pub fn approximate_pi(n: TermCount) -> f64 {
    4.0 * leibniz_sum(n.get())
}

/// Partial sum Σ_{k=0}^{n-1} (-1)^k / (2k + 1), summed left to right
///
/// The sign is carried as an integer and negated each iteration rather than
/// computed with a power function. Returns 0.0 for `n == 0`.
pub fn leibniz_sum(n: u64) -> f64 {
    let mut sum: f64 = 0.0;
    let mut sign: i32 = 1;
    for k in 0..n {
        sum += f64::from(sign) / (2.0 * k as f64 + 1.0);
        sign = -sign;
    }
    sum
}
