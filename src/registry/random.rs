use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
pub struct Prng(StdRng);

impl Prng {
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        tracing::debug!(seed, "seeding random generator");
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn reseed(&mut self, seed: u64) {
        self.0 = StdRng::seed_from_u64(seed);
    }

    pub fn uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    pub fn normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uniform_range() {
        let mut rng = Prng::from_seed(7);
        for _ in 0..1000 {
            let x = rng.uniform();
            assert!((0.0..1.0).contains(&x), "{}", x);
        }
    }

    #[test]
    fn reseed_repeats() {
        let mut rng = Prng::from_time();
        rng.reseed(42);
        let first = (rng.uniform(), rng.normal());
        rng.reseed(42);
        let second = (rng.uniform(), rng.normal());
        assert_eq!(first, second);
    }
}
