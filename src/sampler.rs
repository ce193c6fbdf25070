//! The Sampler component: fixed-Hamming-weight ternary polynomial generation.
//!
//! Produces a length-N polynomial with exactly `d1` coefficients equal to `+v`, exactly `d2`
//! equal to `-v`, and the rest zero, via a constant-time Fisher-Yates shuffle over a fixed initial
//! layout. The sequence of swaps depends only on the random tape, not on the positions being
//! swapped, so there is no data-dependent branching on secret values.

use crate::error::{ensure, Error};
use crate::prf::Prf;
use alloc::vec;

/// Fills `out` with `d1` copies of `+v`, `d2` copies of `-v`, and zeros elsewhere, then
/// constant-time shuffles the result using randomness drawn from `prf`.
///
/// # Errors
/// Returns `Error::BadData` if `d1 + d2` exceeds `out.len()`. Propagates `Error::Random` from
/// the underlying stream (never actually produced by the `sha3`-backed `Prf`, but part of the
/// stated contract).
pub(crate) fn sample_ternary(prf: &mut Prf, out: &mut [i32], d1: usize, d2: usize, v: i32) -> Result<(), Error> {
    let n = out.len();
    ensure!(d1 + d2 <= n, Error::BadData);

    for c in out.iter_mut().take(d1) {
        *c = v;
    }
    for c in out.iter_mut().take(d1 + d2).skip(d1) {
        *c = -v;
    }
    for c in out.iter_mut().take(n).skip(d1 + d2) {
        *c = 0;
    }

    // One 16-bit random word per coefficient, consumed in a single squeeze.
    let mut tape = vec![0u8; 2 * n];
    prf.fill(&mut tape)?;

    for i in (1..n).rev() {
        let word = u16::from_le_bytes([tape[2 * i], tape[2 * i + 1]]);
        let j = (word as usize) % (i + 1);
        out.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_matches_requested_counts() {
        let mut prf = Prf::shake256(&[1u8; 32], 0);
        let mut out = [0i32; 401];
        sample_ternary(&mut prf, &mut out, 10, 10, 1).unwrap();
        let (mut pos, mut neg, mut zero) = (0, 0, 0);
        for &c in &out {
            match c {
                1 => pos += 1,
                -1 => neg += 1,
                0 => zero += 1,
                _ => panic!("unexpected coefficient {c}"),
            }
        }
        assert_eq!((pos, neg, zero), (10, 10, 381));
    }

    #[test]
    fn rejects_oversized_weight() {
        let mut prf = Prf::shake256(&[1u8; 32], 0);
        let mut out = [0i32; 8];
        assert_eq!(sample_ternary(&mut prf, &mut out, 5, 5, 1), Err(Error::BadData));
    }

    #[test]
    fn distinct_seeds_give_distinct_polynomials() {
        let mut a = [0i32; 439];
        let mut b = [0i32; 439];
        sample_ternary(&mut Prf::shake256(&[2u8; 32], 0), &mut a, 142, 142, 3).unwrap();
        sample_ternary(&mut Prf::shake256(&[3u8; 32], 0), &mut b, 142, 142, 3).unwrap();
        assert_ne!(a, b);
    }
}
