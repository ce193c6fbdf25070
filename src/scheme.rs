//! The Scheme component: keygen, encrypt, and decrypt, generic over a `ParamSet`.
//!
//! Per the Sampler design note, randomness is not threaded through a single long-lived PRF
//! object across calls; instead each operation derives its own domain-separated `Prf` streams
//! from a caller-supplied (or OS-sourced) seed, keeping the PRF itself stateless between calls.
//! Label bytes: `0` for `f'`, `1` for `g`, `2` for the encryption blinding polynomial `r`
//! (chosen so that distinct sub-samples drawn from one seed never reuse a stream).
//!
//! Every secret or secret-derived polynomial buffer allocated here is zeroized as soon as it is
//! no longer needed, per the component's "secret polynomials... MUST be zeroized before release"
//! requirement. A buffer that escapes a function as part of its return value (`f`/`h` from
//! `keygen`) is left for its caller to zeroize once it has served its purpose there (`lib.rs`
//! zeroizes both right after packing them into wire bytes).

use crate::codec;
use crate::error::Error;
use crate::params::ParamSet;
use crate::poly::neg_mod_3;
use crate::poly_inv::inv_q;
use crate::poly_mul::mul_mod_q;
use crate::prf::Prf;
use crate::sampler::sample_ternary;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

const LABEL_FPRIME: u8 = 0;
const LABEL_G: u8 = 1;
const LABEL_R: u8 = 2;

/// The raw polynomial halves of a generated key pair.
pub(crate) struct KeyPair {
    /// The private polynomial `f`.
    pub(crate) sk_f: Vec<i32>,
    /// The public polynomial `h`.
    pub(crate) pk_h: Vec<i32>,
}

/// Generates a key pair for `params` from `seed`.
///
/// This is the non-retrying form of step 3: a sampled `f'` whose lift `f` has no inverse mod q
/// is reported to the caller as `Error::NoInverse` rather than retried internally, so that a
/// fixed `seed` always determines a single deterministic outcome (retry-on-failure would make
/// the number of PRF draws, and hence the derived key, depend on an internal coin flip that is
/// not reproducible from `seed` alone).
///
/// # Errors
/// `Error::NoInverse` if the sampled private polynomial has no inverse mod q; the caller may
/// retry with a fresh seed. `Error::BadData` if `df`/`dg` exceed `n` for a malformed `ParamSet`.
pub(crate) fn keygen(params: &ParamSet, seed: &[u8]) -> Result<KeyPair, Error> {
    let n = params.n;

    let mut fprime = vec![0i32; n];
    if let Err(e) = sample_ternary(&mut Prf::shake256(seed, LABEL_FPRIME), &mut fprime, params.df, params.df, params.p as i32)
    {
        fprime.zeroize();
        return Err(e);
    }
    let mut f = fprime;
    f[0] += 1; // f ≡ 1 (mod p)

    let mut ft = match inv_q(&f, params.q) {
        Ok(ft) => ft,
        Err(e) => {
            f.zeroize();
            return Err(e);
        }
    };

    let mut g = vec![0i32; n];
    if let Err(e) = sample_ternary(&mut Prf::shake256(seed, LABEL_G), &mut g, params.dg, params.dg, params.p as i32) {
        f.zeroize();
        ft.zeroize();
        g.zeroize();
        return Err(e);
    }

    let mut h = vec![0i32; n];
    mul_mod_q(&mut h, &ft, &g, params.q);
    ft.zeroize();
    g.zeroize();

    Ok(KeyPair { sk_f: f, pk_h: h })
}

/// Encrypts `m` under the public polynomial `pk_h`, returning packed ciphertext bytes.
///
/// # Errors
/// `Error::BadLen` if `m` is too long to encode into an `n`-coefficient message polynomial.
pub(crate) fn encrypt(params: &ParamSet, pk_h: &[i32], m: &[u8], seed: &[u8]) -> Result<Vec<u8>, Error> {
    let n = params.n;
    let mut msg = codec::encode_msg(m, n)?;

    let mut r = vec![0i32; n];
    if let Err(e) = sample_ternary(&mut Prf::shake256(seed, LABEL_R), &mut r, params.df, params.df, 1) {
        r.zeroize();
        msg.zeroize();
        return Err(e);
    }

    let mut e = vec![0i32; n];
    mul_mod_q(&mut e, &r, pk_h, params.q);
    r.zeroize();
    for i in 0..n {
        e[i] = crate::poly::balanced_mod_q(i64::from(e[i]) + i64::from(msg[i]), params.q);
    }
    msg.zeroize();

    Ok(codec::pack(&e, params.q))
}

/// Decrypts `ct` under the private polynomial `sk_f`, returning the original message bytes.
///
/// Per the Codec contract, decoding can recover a best-effort byte sequence even after an
/// integrity failure; this function does not expose that partial result and returns a hard
/// `Error::BadData` instead, since a caller cannot distinguish tampering from a transmission
/// error from the partial bytes alone and treating both as "no valid message" is the safer
/// default for an encryption core.
///
/// # Errors
/// `Error::BadLen` if `ct` is not exactly `2 * n` bytes. `Error::BadData` if any recovered
/// coefficient falls outside `[-2, 2]` after the `PolyMul`, the pad region is non-zero, or the
/// recovered length field is out of range.
pub(crate) fn decrypt(params: &ParamSet, sk_f: &[i32], ct: &[u8]) -> Result<Vec<u8>, Error> {
    let n = params.n;
    let mut e = codec::unpack(ct, n, params.q)?;

    let mut c = vec![0i32; n];
    mul_mod_q(&mut c, sk_f, &e, params.q);
    e.zeroize();

    for x in c.iter_mut() {
        match neg_mod_3(*x) {
            Ok(v) => *x = v,
            Err(err) => {
                c.zeroize();
                return Err(err);
            }
        }
    }

    let (bytes, status) = codec::decode_msg(&c);
    c.zeroize();
    status.map(|()| bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::S112;

    fn seed(byte: u8) -> [u8; 32] {
        [byte; 32]
    }

    #[test]
    fn round_trips_a_short_message() {
        let kp = keygen(&S112, &seed(1)).unwrap();
        let ct = encrypt(&S112, &kp.pk_h, b"hi", &seed(2)).unwrap();
        let pt = decrypt(&S112, &kp.sk_f, &ct).unwrap();
        assert_eq!(pt, b"hi");
    }

    #[test]
    fn round_trips_empty_message() {
        let kp = keygen(&S112, &seed(3)).unwrap();
        let ct = encrypt(&S112, &kp.pk_h, b"", &seed(4)).unwrap();
        let pt = decrypt(&S112, &kp.sk_f, &ct).unwrap();
        assert!(pt.is_empty());
    }

    #[test]
    fn round_trips_maximum_length_message() {
        let kp = keygen(&S112, &seed(5)).unwrap();
        let max_len = (S112.n - 16) / 8;
        let m: Vec<u8> = (0..max_len).map(|i| i as u8).collect();
        let ct = encrypt(&S112, &kp.pk_h, &m, &seed(6)).unwrap();
        let pt = decrypt(&S112, &kp.sk_f, &ct).unwrap();
        assert_eq!(pt, m);
    }

    #[test]
    fn distinct_seeds_give_distinct_keys_and_ciphertexts() {
        let kp1 = keygen(&S112, &seed(7)).unwrap();
        let kp2 = keygen(&S112, &seed(8)).unwrap();
        assert_ne!(kp1.pk_h, kp2.pk_h);

        let ct1 = encrypt(&S112, &kp1.pk_h, b"same message", &seed(9)).unwrap();
        let ct2 = encrypt(&S112, &kp1.pk_h, b"same message", &seed(10)).unwrap();
        assert_ne!(ct1, ct2);
        assert_eq!(decrypt(&S112, &kp1.sk_f, &ct1).unwrap(), b"same message");
        assert_eq!(decrypt(&S112, &kp1.sk_f, &ct2).unwrap(), b"same message");
    }

    #[test]
    fn tampered_ciphertext_is_rejected_or_self_corrects() {
        let kp = keygen(&S112, &seed(11)).unwrap();
        let mut ct = encrypt(&S112, &kp.pk_h, b"hello world", &seed(12)).unwrap();
        ct[0] ^= 0x01;
        match decrypt(&S112, &kp.sk_f, &ct) {
            Ok(m) => assert_eq!(m, b"hello world"),
            Err(e) => assert_eq!(e, Error::BadData),
        }
    }
}
