use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Seed used when the caller does not choose one.
pub const DEFAULT_SEED: u64 = 42;

/// The seeded random source for one scenario invocation.
///
/// Every draw operation is pinned here. Changing how any of them maps the underlying stream to a
/// value changes every generated workload, which breaks comparisons against earlier runs.
#[derive(Debug, Clone)]
pub struct WorkloadRng {
    inner: ChaCha12Rng,
}

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// An integer in the inclusive range `[min, max]`.
    pub fn bounded_int(&mut self, min: i64, max: i64) -> i64 {
        self.inner.gen_range(min..=max)
    }

    /// `len` characters drawn from `[A-Za-z0-9]`.
    pub fn alphanumeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| self.inner.sample(Alphanumeric) as char)
            .collect()
    }

    /// A version 4 UUID built from 16 bytes of this stream, hyphenated and lowercase.
    pub fn uuid(&mut self) -> String {
        let bytes: [u8; 16] = self.inner.gen();
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .hyphenated()
            .to_string()
    }

    /// An index in `[0, len)`, for drawing from a retained list.
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}
