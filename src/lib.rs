#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// Component map (see DESIGN.md for the corresponding grounding per file):
//
// PRF              --> prf.rs
// Sampler          --> sampler.rs
// PolyMul          --> poly_mul.rs
// PolyInv          --> poly_inv.rs
// Codec            --> codec.rs
// Scheme           --> scheme.rs
// shared reduction --> poly.rs
// error taxonomy   --> error.rs
// parameter table  --> params.rs
//
// The five parameter sets are modules in this file with injected macro code that connects them
// into the functionality in scheme.rs.

mod codec;
mod error;
mod params;
mod poly;
mod poly_inv;
mod poly_mul;
mod prf;
mod sampler;
mod scheme;

/// All functionality is covered by traits, such that consumers can utilize trait objects as
/// desired.
pub mod traits;

pub use error::Error;

// This common functionality is injected into each parameter set module.
macro_rules! functionality {
    () => {
        use crate::codec;
        use crate::error::Error;
        use crate::scheme;
        use crate::traits::{Decrypt, Encrypt, KeyGen, SerDes};
        use alloc::vec::Vec;
        use rand_core::{CryptoRngCore, RngCore};
        use zeroize::{Zeroize, ZeroizeOnDrop};

        /// Byte length of a serialized public key for this parameter set.
        pub const PK_LEN: usize = PARAMS.packed_len();
        /// Byte length of a serialized private key for this parameter set.
        pub const SK_LEN: usize = PARAMS.packed_len();
        /// Byte length of a serialized ciphertext for this parameter set.
        pub const CT_LEN: usize = PARAMS.packed_len();

        /// Correctly sized public key specific to the target security parameter set.
        #[derive(Clone)]
        pub struct PublicKey([u8; PK_LEN]);

        /// Correctly sized private key specific to the target security parameter set.
        ///
        /// Unlike `PublicKey` and `Ciphertext`, this holds secret polynomial coefficients and
        /// is zeroized on drop.
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct PrivateKey([u8; SK_LEN]);

        /// Correctly sized ciphertext specific to the target security parameter set.
        #[derive(Clone)]
        pub struct Ciphertext([u8; CT_LEN]);

        /// Key generation handle for this parameter set.
        ///
        /// Per NTRU's key generation algorithm, this accepts no input beyond randomness and
        /// produces a public key and a private key. The public key can be made public; the
        /// private key must remain private. The outputs are opaque structs specific to this
        /// parameter set.
        pub struct KG();

        fn seed_from_rng(rng: &mut impl CryptoRngCore) -> [u8; 32] {
            let mut seed = [0u8; 32];
            rng.fill_bytes(&mut seed);
            seed
        }

        impl KeyGen for KG {
            type PublicKey = PublicKey;
            type PrivateKey = PrivateKey;

            fn try_keygen_with_rng(rng: &mut impl CryptoRngCore) -> Result<(PublicKey, PrivateKey), Error> {
                let seed = seed_from_rng(rng);
                let mut kp = scheme::keygen(&PARAMS, &seed)?;

                let pk_bytes = codec::pack(&kp.pk_h, PARAMS.q);
                let mut sk_bytes = codec::pack(&kp.sk_f, PARAMS.q);
                kp.sk_f.zeroize();
                kp.pk_h.zeroize();

                let mut pk = [0u8; PK_LEN];
                let mut sk = [0u8; SK_LEN];
                pk.copy_from_slice(&pk_bytes);
                sk.copy_from_slice(&sk_bytes);
                sk_bytes.zeroize();
                Ok((PublicKey(pk), PrivateKey(sk)))
            }
        }

        impl Encrypt for PublicKey {
            type Ciphertext = Ciphertext;

            fn try_encrypt_with_rng(&self, rng: &mut impl CryptoRngCore, m: &[u8]) -> Result<Ciphertext, Error> {
                let seed = seed_from_rng(rng);
                let pk_h = codec::unpack(&self.0, PARAMS.n, PARAMS.q)?;
                let ct_bytes = scheme::encrypt(&PARAMS, &pk_h, m, &seed)?;
                let mut ct = [0u8; CT_LEN];
                ct.copy_from_slice(&ct_bytes);
                Ok(Ciphertext(ct))
            }
        }

        impl Decrypt for PrivateKey {
            type Ciphertext = Ciphertext;

            fn try_decrypt(&self, ct: &Ciphertext) -> Result<Vec<u8>, Error> {
                let mut sk_f = codec::unpack(&self.0, PARAMS.n, PARAMS.q)?;
                let result = scheme::decrypt(&PARAMS, &sk_f, &ct.0);
                sk_f.zeroize();
                result
            }
        }

        impl SerDes for PublicKey {
            type ByteArray = [u8; PK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(pk: Self::ByteArray) -> Result<Self, Error> {
                codec::unpack(&pk, PARAMS.n, PARAMS.q)?;
                Ok(PublicKey(pk))
            }
        }

        impl SerDes for PrivateKey {
            type ByteArray = [u8; SK_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(sk: Self::ByteArray) -> Result<Self, Error> {
                codec::unpack(&sk, PARAMS.n, PARAMS.q)?;
                Ok(PrivateKey(sk))
            }
        }

        impl SerDes for Ciphertext {
            type ByteArray = [u8; CT_LEN];

            fn into_bytes(self) -> Self::ByteArray { self.0 }

            fn try_from_bytes(ct: Self::ByteArray) -> Result<Self, Error> {
                codec::unpack(&ct, PARAMS.n, PARAMS.q)?;
                Ok(Ciphertext(ct))
            }
        }
    };
}

/// Functionality for the 112-bit security parameter set.
#[cfg(feature = "ntru-s112")]
pub mod ntru_s112 {
    //! Typical usage flow entails:
    //! 1. The originator runs `try_keygen()` to get a public key `pk` and a private key `sk`.
    //! 2. The originator serializes `pk` via `pk.into_bytes()` and sends it to the remote party.
    //! 3. The remote party deserializes the bytes via `try_from_bytes(<bytes>)` and runs
    //!    `pk.try_encrypt(m)` to get the ciphertext `ct`.
    //! 4. The remote party serializes `ct` via `ct.into_bytes()` and sends it to the originator.
    //! 5. The originator deserializes the ciphertext via `try_from_bytes(<bytes>)` then runs
    //!    `sk.try_decrypt(&ct)` to recover the plaintext.

    const PARAMS: crate::params::ParamSet = crate::params::S112;

    functionality!();
}

/// Functionality for the 128-bit security parameter set.
#[cfg(feature = "ntru-s128")]
pub mod ntru_s128 {
    //! See `ntru_s112` for the typical usage flow.

    const PARAMS: crate::params::ParamSet = crate::params::S128;

    functionality!();
}

/// Functionality for the 192-bit security parameter set.
#[cfg(feature = "ntru-s192")]
pub mod ntru_s192 {
    //! See `ntru_s112` for the typical usage flow.

    const PARAMS: crate::params::ParamSet = crate::params::S192;

    functionality!();
}

/// Functionality for the 215-bit security parameter set.
#[cfg(feature = "ntru-s215")]
pub mod ntru_s215 {
    //! See `ntru_s112` for the typical usage flow.

    const PARAMS: crate::params::ParamSet = crate::params::S215;

    functionality!();
}

/// Functionality for the 256-bit security parameter set.
#[cfg(feature = "ntru-s256")]
pub mod ntru_s256 {
    //! See `ntru_s112` for the typical usage flow.

    const PARAMS: crate::params::ParamSet = crate::params::S256;

    functionality!();
}
