//! Balanced-representative coefficient reduction shared by `poly_mul`, `poly_inv`, and `scheme`.
//!
//! This crate implements only the prime-q parameter family (see `params`), so the reduction
//! strategy used throughout is Shape B from the multiplication component: conditional-subtract
//! without data-dependent branches, rather than the power-of-two mask-and-sign-extend shape.

use crate::error::Error;
use subtle::{Choice, ConditionallySelectable};

/// Reduces `coef` to its balanced representative in `(-q/2, q/2]`, without branching on the
/// (potentially secret-derived) value of `coef`.
///
/// `q` is always an odd prime in this crate's parameter table, so the balanced range has no
/// coefficient exactly at `+q/2`; the textbook "fold `+q/2` to `-q/2`" edge case from the
/// power-of-two family does not arise here. The final fold is done with `subtle`'s
/// `conditional_select` rather than a source-level `if`, the same constant-time-selection idiom
/// the ambient stack uses for its own secret-dependent choices.
#[must_use]
pub(crate) fn balanced_mod_q(coef: i64, q: i64) -> i32 {
    let mut c = coef % q;
    let neg_mask = c >> 63; // all-ones when c < 0 (arithmetic shift), else zero
    c += q & neg_mask;

    let half = q / 2;
    let folded = c - q;
    let above_half = Choice::from(u8::from(c > half));
    c = i64::conditional_select(&c, &folded, above_half);
    c as i32
}

/// The decryption-time reduction table: negate, then fold modulo 3 into `{-1, 0, +1}`.
///
/// Coefficients outside `[-2, 2]` indicate a decryption error (the noisy product did not land in
/// the expected small range) and are reported as `Error::BadData` rather than silently wrapped.
pub(crate) fn neg_mod_3(c: i32) -> Result<i32, Error> {
    match c {
        -2 => Ok(1),
        -1 => Ok(-1),
        0 => Ok(0),
        1 => Ok(1),
        2 => Ok(-1),
        _ => Err(Error::BadData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_reduction_stays_in_range() {
        let q = 6833i64;
        for raw in [-20000i64, -6833, -1, 0, 1, 3416, 6832, 6833, 20000] {
            let c = balanced_mod_q(raw, q);
            assert!(i64::from(c) > -q / 2 - 1 && i64::from(c) <= q / 2);
        }
    }

    #[test]
    fn neg_mod_3_matches_table() {
        assert_eq!(neg_mod_3(-2), Ok(1));
        assert_eq!(neg_mod_3(-1), Ok(-1));
        assert_eq!(neg_mod_3(0), Ok(0));
        assert_eq!(neg_mod_3(1), Ok(1));
        assert_eq!(neg_mod_3(2), Ok(-1));
        assert_eq!(neg_mod_3(3), Err(Error::BadData));
        assert_eq!(neg_mod_3(-3), Err(Error::BadData));
    }
}
