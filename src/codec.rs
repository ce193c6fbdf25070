//! The Codec component: message bit-layout and wire packing.
//!
//! Two unrelated encodings live here. `encode_msg`/`decode_msg` map a byte sequence to/from a
//! length-N ternary polynomial (a 16-bit length prefix, the message bits, then a zero pad
//! region that doubles as an integrity check). `pack`/`unpack` map a length-N polynomial in
//! balanced mod-q form to/from its wire bytes.
//!
//! Wire packing uses one 16-bit little-endian word per coefficient rather than the original
//! source's 12-bit-per-coefficient scheme: that scheme truncates every coefficient to its low 12
//! bits, which only round-trips when every residue mod q fits in 12 bits (q ≤ 4096). None of the
//! prime-q parameter sets this crate implements satisfy that (q ranges from 6287 to 9829), so
//! 16-bit packing is used uniformly for both public keys and ciphertexts.

use crate::error::{ensure, Error};
use crate::poly::balanced_mod_q;
use alloc::vec;
use alloc::vec::Vec;

/// Encodes `m` as a length-`n` ternary polynomial: a little-endian 16-bit length prefix, the
/// bits of `m` (LSB first per byte), then zero padding, each bit mapped `0 -> -1`, `1 -> +1`.
///
/// # Errors
/// Returns `Error::BadLen` if `(m.len() + 2) * 8 > n`.
pub(crate) fn encode_msg(m: &[u8], n: usize) -> Result<Vec<i32>, Error> {
    let l = m.len();
    ensure!((l + 2) * 8 <= n, Error::BadLen);

    let mut poly = vec![0i32; n];
    let signed = |bit: u32| if bit == 1 { 1 } else { -1 };

    for i in 0..16 {
        poly[i] = signed((l as u32 >> i) & 1);
    }
    for (byte_idx, &byte) in m.iter().enumerate() {
        for bit_idx in 0..8 {
            poly[16 + byte_idx * 8 + bit_idx] = signed(u32::from(byte >> bit_idx) & 1);
        }
    }
    Ok(poly)
}

/// Recovers the byte sequence encoded by `encode_msg`.
///
/// Returns the best-effort decoded bytes alongside a status: `Ok(())` when every coefficient
/// matched its expected region (message bits in `{-1, +1}`, pad region all zero) and the
/// recovered length was in range; `Err(Error::BadData)` otherwise. The caller decides whether to
/// trust the returned bytes on an error status (the contract only promises a best effort).
pub(crate) fn decode_msg(poly: &[i32]) -> (Vec<u8>, Result<(), Error>) {
    let n = poly.len();
    let mut failed = false;
    let mut bit_of = |c: i32| -> u32 {
        match c {
            1 => 1,
            -1 => 0,
            _ => {
                failed = true;
                0
            }
        }
    };

    if n < 16 {
        return (Vec::new(), Err(Error::BadData));
    }
    let mut length: u32 = 0;
    for i in 0..16 {
        length |= bit_of(poly[i]) << i;
    }
    let l = length as usize;
    if (l + 2) * 8 > n {
        return (Vec::new(), Err(Error::BadData));
    }

    let mut bytes = vec![0u8; l];
    for (byte_idx, out) in bytes.iter_mut().enumerate() {
        let mut b = 0u8;
        for bit_idx in 0..8 {
            b |= (bit_of(poly[16 + byte_idx * 8 + bit_idx]) as u8) << bit_idx;
        }
        *out = b;
    }
    for &c in &poly[16 + 8 * l..n] {
        if c != 0 {
            failed = true;
        }
    }

    if failed {
        (bytes, Err(Error::BadData))
    } else {
        (bytes, Ok(()))
    }
}

/// Packs a length-`n` polynomial in balanced mod-q form as `2*n` bytes: one little-endian `u16`
/// unsigned residue per coefficient.
pub(crate) fn pack(coeffs: &[i32], q: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 * coeffs.len());
    for &c in coeffs {
        let unsigned = if c < 0 { i64::from(c) + q } else { i64::from(c) };
        out.extend_from_slice(&(unsigned as u16).to_le_bytes());
    }
    out
}

/// Inverse of `pack`: reduces each unpacked residue to balanced mod-q form.
///
/// # Errors
/// Returns `Error::BadLen` if `bytes.len() != 2 * n`.
pub(crate) fn unpack(bytes: &[u8], n: usize, q: i64) -> Result<Vec<i32>, Error> {
    ensure!(bytes.len() == 2 * n, Error::BadLen);
    let mut out = vec![0i32; n];
    for (i, chunk) in bytes.chunks_exact(2).enumerate() {
        let word = u16::from_le_bytes([chunk[0], chunk[1]]);
        out[i] = balanced_mod_q(i64::from(word), q);
    }
    Ok(out)
}
