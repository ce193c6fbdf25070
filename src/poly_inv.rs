//! PolyInv: inversion modulo `(X^N - 1, q)`.
//!
//! Two stages, per the component contract: (a) invert modulo 2 using the extended Euclidean
//! algorithm for `GF(2)[X]`, with `g = X^N + 1` as the fixed modulus and `f = a mod 2` as the
//! value to invert; (b) lift the mod-2 inverse to a mod-q inverse via Newton iteration, which
//! doubles the 2-adic valuation of the residual `a*out - 1` on every step.
//!
//! The mod-2 stage is structured as a textbook extended-Euclidean GCD rather than the in-place,
//! pointer-windowed "almost inverse" bit trick some NTRU implementations use: both compute the
//! same Bezout coefficient, and the textbook form is the one whose correctness is checkable by
//! elementary polynomial-ring reasoning rather than by tracing pointer arithmetic. This stage is
//! allowed to be variable-time (it only ever runs once, on a secret polynomial, during key
//! generation) so the asymptotic cost of plain polynomial long division is immaterial.

use crate::error::Error;
use crate::poly::balanced_mod_q;
use crate::poly_mul::mul_mod_q;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

/// Highest index with a set bit, or `None` for the zero polynomial.
fn deg(p: &[u8]) -> Option<usize> {
    p.iter().rposition(|&b| b == 1)
}

fn trim(p: &mut Vec<u8>) {
    while p.last() == Some(&0) {
        p.pop();
    }
}

/// `GF(2)[X]` long division: returns `(quotient, remainder)` with `num = quotient*den + remainder`
/// (addition and subtraction coincide over `GF(2)`).
fn divmod_gf2(num: &[u8], den: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let den_deg = deg(den).expect("division by the zero polynomial");
    let mut rem = num.to_vec();
    trim(&mut rem);
    let mut quot = vec![0u8; 1];
    while let Some(rem_deg) = deg(&rem) {
        if rem_deg < den_deg {
            break;
        }
        let shift = rem_deg - den_deg;
        if quot.len() <= shift {
            quot.resize(shift + 1, 0);
        }
        quot[shift] ^= 1;
        for (i, &d) in den.iter().enumerate() {
            if d == 1 {
                if rem.len() <= i + shift {
                    rem.resize(i + shift + 1, 0);
                }
                rem[i + shift] ^= 1;
            }
        }
        trim(&mut rem);
    }
    trim(&mut quot);
    (quot, rem)
}

fn mul_gf2(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 1 {
            for (j, &bj) in b.iter().enumerate() {
                if bj == 1 {
                    out[i + j] ^= 1;
                }
            }
        }
    }
    trim(&mut out);
    out
}

fn xor_gf2(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; a.len().max(b.len())];
    for (i, &v) in a.iter().enumerate() {
        out[i] ^= v;
    }
    for (i, &v) in b.iter().enumerate() {
        out[i] ^= v;
    }
    trim(&mut out);
    out
}

/// Inverts `a mod 2` in the ring `GF(2)[X]/(X^N - 1)`, returning an N-coefficient 0/1 vector.
fn inv_mod2(a: &[i32]) -> Result<Vec<u8>, Error> {
    let n = a.len();
    let mut g = vec![0u8; n + 1];
    g[0] = 1;
    g[n] = 1; // X^N + 1, the ring modulus over GF(2)

    let mut f: Vec<u8> = a.iter().map(|&c| (c & 1) as u8).collect();
    trim(&mut f);
    if f.is_empty() {
        return Err(Error::NoInverse);
    }

    // Extended Euclidean algorithm: s_i * a ≡ r_i (mod g) is maintained throughout.
    let (mut r0, mut s0) = (g, vec![0u8]);
    let (mut r1, mut s1) = (f, vec![1u8]);

    while deg(&r1).is_some() {
        let (q, r2) = divmod_gf2(&r0, &r1);
        let s2 = xor_gf2(&s0, &mul_gf2(&q, &s1));
        r0 = r1;
        s0 = s1;
        r1 = r2;
        s1 = s2;
    }

    if deg(&r0) != Some(0) {
        // gcd(a mod 2, X^N + 1) has positive degree: a is not invertible mod 2.
        return Err(Error::NoInverse);
    }

    // s0 * a ≡ 1 (mod X^N + 1); fold any degree >= N back down via X^N ≡ 1 to land in R.
    let mut out = vec![0u8; n];
    for (i, &v) in s0.iter().enumerate() {
        if v == 1 {
            out[i % n] ^= 1;
        }
    }
    Ok(out)
}

fn is_unit(residual: &[i32]) -> bool {
    residual[0] == 1 && residual[1..].iter().all(|&c| c == 0)
}

/// Computes `out` such that `(a * out) mod (X^N - 1, q) = 1`.
///
/// Every buffer here holds either the candidate secret-key inverse itself or a value derived
/// directly from it, so each is zeroized as soon as it is no longer needed (and the candidate
/// inverse is zeroized before returning `Error::NoInverse`, since a failed candidate is still
/// secret-shaped data).
///
/// # Errors
/// Returns `Error::NoInverse` when `a` has no inverse mod 2 (and hence none mod q), or (as a
/// defensive final check) if Newton lifting somehow fails to converge.
pub(crate) fn inv_q(a: &[i32], q: i64) -> Result<Vec<i32>, Error> {
    let n = a.len();
    let mut seed = inv_mod2(a)?;
    let mut out: Vec<i32> = seed.iter().map(|&b| i32::from(b)).collect();
    seed.zeroize();

    // Iteration count: ceil(log2(ceil(log2(q)))), per the component contract; at least one
    // iteration always runs since q > 2 for every parameter set in this crate.
    let mut log2_q = 0u32;
    while (1i64 << log2_q) < q {
        log2_q += 1;
    }
    let mut iters = 0u32;
    while (1u32 << iters) < log2_q {
        iters += 1;
    }
    iters = iters.max(1);

    let mut residual = vec![0i32; n];
    for _ in 0..iters {
        mul_mod_q(&mut residual, a, &out, q);
        if is_unit(&residual) {
            break;
        }
        let mut two_minus_residual = vec![0i32; n];
        two_minus_residual[0] = balanced_mod_q(2 - i64::from(residual[0]), q);
        for i in 1..n {
            two_minus_residual[i] = balanced_mod_q(-i64::from(residual[i]), q);
        }
        let mut next = vec![0i32; n];
        mul_mod_q(&mut next, &out, &two_minus_residual, q);
        two_minus_residual.zeroize();
        out.zeroize();
        out = next;
    }

    mul_mod_q(&mut residual, a, &out, q);
    let converged = is_unit(&residual);
    residual.zeroize();
    if converged {
        Ok(out)
    } else {
        out.zeroize();
        Err(Error::NoInverse)
    }
}
