use crate::error::Error;
use alloc::vec::Vec;
use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

/// The `KeyGen` trait is defined to allow trait objects.
pub trait KeyGen {
    /// The (public) key sent from the originator to the remote party.
    type PublicKey;
    /// The (private) key retained by the originator and used to decrypt.
    type PrivateKey;

    /// Generates a public/private key pair specific to this security parameter set, using the
    /// OS default random number generator.
    ///
    /// # Errors
    /// Returns `Error::NoInverse` if the sampled private polynomial has no inverse mod q; retry.
    ///
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// # #[cfg(feature = "ntru-s112")] {
    /// use ntruenc::ntru_s112;
    /// use ntruenc::traits::{KeyGen, SerDes, Encrypt, Decrypt};
    ///
    /// let (pk, sk) = ntru_s112::KG::try_keygen()?; // originator generates both keys
    /// let pk_bytes = pk.into_bytes(); // originator serializes the public key
    ///
    /// let pk_remote = ntru_s112::PublicKey::try_from_bytes(pk_bytes)?; // remote party deserializes it
    /// let ct = pk_remote.try_encrypt(b"hello")?; // remote party encrypts a message
    /// let ct_bytes = ct.into_bytes();
    ///
    /// let ct_back = ntru_s112::Ciphertext::try_from_bytes(ct_bytes)?; // originator deserializes ct
    /// let pt = sk.try_decrypt(&ct_back)?; // originator decrypts
    /// assert_eq!(pt, b"hello");
    /// # }
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen() -> Result<(Self::PublicKey, Self::PrivateKey), Error> {
        Self::try_keygen_with_rng(&mut OsRng)
    }

    /// Generates a public/private key pair using a caller-provided random number generator.
    ///
    /// # Errors
    /// Returns `Error::NoInverse` if the sampled private polynomial has no inverse mod q; retry.
    fn try_keygen_with_rng(rng: &mut impl CryptoRngCore) -> Result<(Self::PublicKey, Self::PrivateKey), Error>;
}

/// The `Encrypt` trait defines methods for producing a ciphertext from a public key and a
/// message.
pub trait Encrypt {
    /// The ciphertext type produced, specific to this security parameter set.
    type Ciphertext;

    /// Encrypts `m` using the OS default random number generator for the blinding polynomial.
    ///
    /// # Errors
    /// Returns `Error::BadLen` if `m` does not fit the parameter set's maximum plaintext length.
    #[cfg(feature = "default-rng")]
    fn try_encrypt(&self, m: &[u8]) -> Result<Self::Ciphertext, Error> {
        self.try_encrypt_with_rng(&mut OsRng, m)
    }

    /// Encrypts `m` using a caller-provided random number generator for the blinding polynomial.
    ///
    /// # Errors
    /// Returns `Error::BadLen` if `m` does not fit the parameter set's maximum plaintext length.
    fn try_encrypt_with_rng(&self, rng: &mut impl CryptoRngCore, m: &[u8]) -> Result<Self::Ciphertext, Error>;
}

/// The `Decrypt` trait defines the method for recovering a plaintext from a private key and
/// a ciphertext.
pub trait Decrypt {
    /// The ciphertext type accepted, specific to this security parameter set.
    type Ciphertext;

    /// Decrypts `ct`, returning the recovered message bytes.
    ///
    /// # Errors
    /// Returns `Error::BadData` if the ciphertext fails the integrity check built into the
    /// message encoding (tampering, corruption, or decryption failure are not distinguished).
    fn try_decrypt(&self, ct: &Self::Ciphertext) -> Result<Vec<u8>, Error>;
}

/// The `SerDes` trait provides methods for serializing and deserializing cryptographic objects.
pub trait SerDes {
    /// The fixed-size byte array type used for serialization.
    type ByteArray;

    /// Produces a byte array of fixed size specific to the struct being serialized.
    fn into_bytes(self) -> Self::ByteArray;

    /// Consumes a byte array of fixed size specific to the struct being deserialized; performs
    /// validation.
    ///
    /// # Errors
    /// Returns an error on malformed input.
    fn try_from_bytes(ba: Self::ByteArray) -> Result<Self, Error>
    where
        Self: Sized;
}
