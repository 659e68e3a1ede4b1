use rand::{SeedableRng, seq::index};

/// Deterministic generator of test value sets.
pub struct SetGen {
    rng: rand::rngs::StdRng,
}

impl SetGen {
    pub fn new(seed: u64) -> Self {
        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self { rng }
    }

    /// `len` distinct values drawn uniformly from the full u16 universe.
    pub fn random(&mut self, len: usize) -> Vec<u16> {
        index::sample(&mut self.rng, 1 << 16, len)
            .into_iter()
            .map(|i| i as u16)
            .collect()
    }

    /// Distinct values confined to `buckets` random high-byte buckets,
    /// `per_bucket` values each.
    pub fn clustered(&mut self, buckets: usize, per_bucket: usize) -> Vec<u16> {
        let mut out = Vec::with_capacity(buckets * per_bucket);
        for hi in index::sample(&mut self.rng, 256, buckets).into_vec() {
            for lo in index::sample(&mut self.rng, 256, per_bucket) {
                out.push(((hi as u16) << 8) | lo as u16);
            }
        }
        out
    }
}
