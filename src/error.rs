use core::fmt;

/// The taxonomy of failure kinds surfaced by the core's cryptographic operations.
///
/// Every fallible operation in this crate returns one of these five kinds by value; the core
/// never panics on malformed input. Names are deliberately abstract rather than tied to any one
/// component, since `BadLen`/`BadData` in particular are returned from several places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied buffer is smaller than the contractually required size, or a plaintext
    /// is too long for the ring dimension in use.
    BadLen,
    /// Message decoding found a coefficient that is neither −1 nor +1 in a bit position, or
    /// non-zero in the zero-pad region, or the recovered length field is out of range.
    BadData,
    /// A sampled polynomial has no inverse modulo q for the ring in use; the caller may retry
    /// key generation with a fresh sample.
    NoInverse,
    /// The underlying randomness source was exhausted.
    Random,
    /// An unrecognized or inconsistent `(N, df, dg, q)` tuple, or a missing/invalid handle.
    Param,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::BadLen => "buffer length does not match the required size",
            Error::BadData => "decoded data failed an integrity check",
            Error::NoInverse => "polynomial has no inverse in the target ring",
            Error::Random => "randomness source was exhausted",
            Error::Param => "unrecognized or inconsistent parameter tuple",
        };
        f.write_str(msg)
    }
}

/// If the condition is not met, return the given error. Borrowed from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure;
