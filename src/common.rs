use rand::{CryptoRng, RngCore};

/// Minimum RSA modulus size accepted for key wrapping.
pub const MIN_RSA_MODULUS_BITS: usize = 2048;

/// A cryptographically secure random source that can be handed to a single
/// wrap operation.
///
/// Any `RngCore + CryptoRng` implements it, including `rand::thread_rng()` and
/// seeded `StdRng` instances.
pub trait SecureRandom: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRandom for T {}

#[inline(never)]
pub(crate) fn timingsafe_eq(a: &[u8], b: &[u8]) -> bool {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(0, |c, (x, y)| c | (x ^ y)) == 0
}
