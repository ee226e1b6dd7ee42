//! Deterministic and non-deterministic shuffling.
//!
//! Provides the Fisher–Yates shuffle used to randomize question and option
//! order per attempt. The random source is injected through [`RandomSource`]
//! so callers and tests control determinism: a seeded [`Lcg`] yields the same
//! permutation for the same seed and input length, while [`ThreadRandom`]
//! draws from the thread-local OS-seeded generator.

use rand::Rng;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// A source of uniform random fractions in `[0, 1)`.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

/// Seeded linear-congruential generator.
///
/// `state = (state * 1103515245 + 12345) mod 2^31`; each draw advances the
/// state once and returns `state / 2^31`. The same seed always produces the
/// same draw sequence, which keeps a student's shuffled order stable across
/// page reloads of the same attempt.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }
}

impl RandomSource for Lcg {
    fn next_fraction(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// Non-deterministic source over the thread-local generator.
pub struct ThreadRandom(rand::rngs::ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_fraction(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Shuffle `items` into a new vector using the supplied random source.
///
/// Backward Fisher–Yates: for each `i` from `len - 1` down to `1`, draw `j`
/// uniformly from `[0, i]` and swap. The input slice is left untouched.
pub fn shuffle_with<T: Clone>(items: &[T], source: &mut dyn RandomSource) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = (source.next_fraction() * (i as f64 + 1.0)) as usize;
        shuffled.swap(i, j.min(i));
    }
    shuffled
}

/// Shuffle `items`, deterministically when `seed` is supplied.
///
/// A seed selects the [`Lcg`] path; without one the shuffle draws from
/// [`ThreadRandom`]. Sequences of length 0 or 1 come back unchanged.
pub fn shuffle<T: Clone>(items: &[T], seed: Option<u64>) -> Vec<T> {
    match seed {
        Some(seed) => shuffle_with(items, &mut Lcg::new(seed)),
        None => shuffle_with(items, &mut ThreadRandom::new()),
    }
}

/// Derive a shuffle seed from a student and exam identifier pair.
///
/// splitmix64-style finalizer over the two ids.
pub fn derive_seed(student_id: i64, exam_id: i64) -> u64 {
    let mut z =
        (student_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (exam_id as u64).rotate_left(32);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
