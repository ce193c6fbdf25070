//! PolyMul: recursive Karatsuba multiplication modulo `(X^N - 1, q)`.
//!
//! This is the largest component by implementation effort. Two sub-problems are solved in
//! sequence: (1) a full, non-cyclic linear convolution of the two length-N operands via recursive
//! Karatsuba, bottoming out in schoolbook multiplication below a fixed threshold, and (2) folding
//! that `2N - 1`-coefficient linear convolution down to `N` coefficients using the ring relation
//! `X^N ≡ 1`, followed by balanced reduction mod q.
//!
//! Only the prime-q family is implemented (see `params`), so accumulation uses 64-bit
//! accumulators throughout (Shape B): `N * q^2` can exceed 32 bits once `N` passes a few hundred
//! and `q` a few thousand, so 64-bit accumulators are used unconditionally rather than attempting
//! the narrower power-of-two fast path.
//!
//! The recursion does not allocate: `mul_mod_q` computes the total transient scratch a call of
//! length N needs up front and carves two flat arenas (one `i64` buffer for the `t1`/`t2`/`t3`
//! cross-products, one `i32` buffer for the `a_sum`/`b_sum` operand sums) once, at the top level.
//! Each recursive level takes its slice of those arenas and hands the remainder down; the three
//! sibling sub-multiplications at a given level reuse the same remainder in turn rather than each
//! getting their own, since only one is ever in flight at a time in this single-threaded,
//! depth-first recursion. Both arenas are zeroized before `mul_mod_q` returns, since every
//! multiplication this crate performs operates on at least one secret operand.

use crate::poly::balanced_mod_q;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

/// Below this length, Karatsuba recursion bottoms out into schoolbook multiplication.
///
/// Any fixed threshold in `[6, 50]` is a valid choice; 32 sits comfortably in that range and
/// keeps the recursion tree shallow (five or six levels) for every ring dimension in the
/// parameter table.
const SCHOOLBOOK_THRESHOLD: usize = 32;

/// Transient `(i64, i32)` scratch lengths a Karatsuba call on length-`l` operands needs beyond its
/// own output buffer, per the recursive formula in the component's contract: a level's own
/// `t1`/`t2`/`t3` cross-products plus the `a_sum`/`b_sum` operand sums, plus (not times three)
/// whatever the single `l/2`-length sub-call below it needs, since the three sibling sub-calls at
/// this level run one after another and reuse that same region.
fn transient_budget(l: usize) -> (usize, usize) {
    if l <= SCHOOLBOOK_THRESHOLD {
        return (0, 0);
    }
    let half = l - l / 2;
    let hi_len = l - half;
    let (sub_i64, sub_i32) = transient_budget(half);
    let own_i64 = (2 * half - 1) + (2 * hi_len - 1) + (2 * half - 1); // t1 + t3 + t2
    let own_i32 = 2 * half; // a_sum + b_sum
    (own_i64 + sub_i64, own_i32 + sub_i32)
}

/// Computes `r[k] = sum_{i+j == k (mod N)} a[i]*b[j]`, balanced mod `q`.
///
/// `a`, `b`, and `r` must all have the same length (`N`); `r` may not alias `a` or `b`.
pub(crate) fn mul_mod_q(r: &mut [i32], a: &[i32], b: &[i32], q: i64) {
    let n = a.len();
    debug_assert_eq!(b.len(), n);
    debug_assert_eq!(r.len(), n);

    let mut conv = vec![0i64; 2 * n - 1];
    let (i64_len, i32_len) = transient_budget(n);
    let mut i64_scratch = vec![0i64; i64_len];
    let mut i32_scratch = vec![0i32; i32_len];
    karatsuba(&mut conv, a, b, &mut i64_scratch, &mut i32_scratch);

    // Fold the linear convolution to length N via X^N ≡ 1.
    for i in 0..n - 1 {
        let wrapped = conv[i + n];
        conv[i] += wrapped;
    }
    for (dst, &src) in r.iter_mut().zip(conv[..n].iter()) {
        *dst = balanced_mod_q(src, q);
    }

    conv.zeroize();
    i64_scratch.zeroize();
    i32_scratch.zeroize();
}

/// Writes the full (non-cyclic) linear convolution of `a` and `b` into `out` (length `2*l - 1`
/// where `l == a.len() == b.len()`), drawing any recursion scratch from `i64_scratch`/`i32_scratch`
/// rather than allocating.
fn karatsuba(out: &mut [i64], a: &[i32], b: &[i32], i64_scratch: &mut [i64], i32_scratch: &mut [i32]) {
    let l = a.len();
    debug_assert_eq!(b.len(), l);
    debug_assert_eq!(out.len(), 2 * l - 1);

    if l <= SCHOOLBOOK_THRESHOLD {
        schoolbook(out, a, b);
        return;
    }

    // Split into low/high halves of length ceil(l/2); the high half may be shorter.
    let half = l - l / 2;
    let (a_lo, a_hi) = a.split_at(half);
    let (b_lo, b_hi) = b.split_at(half);
    let hi_len = l - half;
    debug_assert!(hi_len > 0);

    let t1_len = 2 * half - 1;
    let t3_len = 2 * hi_len - 1;
    let t2_len = 2 * half - 1;

    let (t1, i64_rest) = i64_scratch.split_at_mut(t1_len);
    let (t3, i64_rest) = i64_rest.split_at_mut(t3_len);
    let (t2, i64_rest) = i64_rest.split_at_mut(t2_len);

    let (a_sum, i32_rest) = i32_scratch.split_at_mut(half);
    let (b_sum, i32_rest) = i32_rest.split_at_mut(half);

    karatsuba(t1, a_lo, b_lo, i64_rest, i32_rest);
    karatsuba(t3, a_hi, b_hi, i64_rest, i32_rest);

    for i in 0..half {
        a_sum[i] = a_lo[i] + if i < hi_len { a_hi[i] } else { 0 };
        b_sum[i] = b_lo[i] + if i < hi_len { b_hi[i] } else { 0 };
    }
    karatsuba(t2, a_sum, b_sum, i64_rest, i32_rest);

    for x in out.iter_mut() {
        *x = 0;
    }
    for i in 0..t1_len {
        out[i] += t1[i];
        let cross = t2[i] - t1[i] - if i < t3_len { t3[i] } else { 0 };
        out[i + half] += cross;
    }
    for (i, &v) in t3.iter().enumerate() {
        out[i + 2 * half] += v;
    }
}

/// The recursion's base case: plain `O(l^2)` schoolbook multiplication.
fn schoolbook(out: &mut [i64], a: &[i32], b: &[i32]) {
    for x in out.iter_mut() {
        *x = 0;
    }
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let ai = i64::from(ai);
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * i64::from(bj);
        }
    }
}
