//! Seedable random source for fixture generation
//!
//! [`BaseGenerator`] owns a private [`StdRng`] and exposes the primitives
//! fixtures are built from: uniform floats, bounded integers, element
//! choice, identifier and string generation, and bounded date offsets.
//! A fixed seed reproduces the full value stream, identifiers included.

use chrono::{DateTime, Duration, Utc};
use edr_types::SearchHit;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

/// Widest past offset drawn by [`BaseGenerator::past_date`], ~100 days
const PAST_WINDOW_MS: i64 = 100 * 24 * 60 * 60 * 1000;

/// Widest future offset drawn by [`BaseGenerator::future_date`], 5 days
const FUTURE_WINDOW_MS: i64 = 5 * 24 * 60 * 60 * 1000;

/// Pool of operator names for generated user ids
const USERS: &[&str] = &["admin", "analyst", "responder", "triage", "soc-lead"];

/// Owned random source shared by all fixture generators
#[derive(Debug)]
pub struct BaseGenerator {
    rng: StdRng,
}

impl BaseGenerator {
    /// Create a generator seeded from system entropy
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed; the value stream is
    /// reproducible across runs
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in [0, 1)
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Uniform integer in [0, max); 0 when `max` is 0
    #[inline]
    pub fn random_n(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.rng.gen_range(0..max)
    }

    /// Uniformly chosen element of `items`
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.rng.gen_range(0..items.len());
        &items[index]
    }

    /// Version-4 UUID built from this generator's random stream
    #[inline]
    pub fn uuid(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    /// Random alphanumeric string of length `len`
    pub fn string(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// Random operator name from a fixed pool
    pub fn user(&mut self) -> String {
        (*self.choose(USERS)).to_string()
    }

    /// Random moment strictly before now, at most [`PAST_WINDOW_MS`] back
    pub fn past_date(&mut self) -> DateTime<Utc> {
        self.past_date_before(Utc::now())
    }

    /// Random moment strictly before `reference`
    pub fn past_date_before(&mut self, reference: DateTime<Utc>) -> DateTime<Utc> {
        reference - Duration::milliseconds(self.offset_ms(PAST_WINDOW_MS))
    }

    /// Random moment strictly after `reference`
    pub fn future_date(&mut self, reference: DateTime<Utc>) -> DateTime<Utc> {
        reference + Duration::milliseconds(self.offset_ms(FUTURE_WINDOW_MS))
    }

    /// Wrap `source` in a search-hit envelope for `index`
    pub fn search_hit<T>(&mut self, index: impl Into<String>, source: T) -> SearchHit<T> {
        SearchHit {
            index: index.into(),
            id: self.uuid().to_string(),
            score: 1.0,
            source,
        }
    }

    fn offset_ms(&mut self, window: i64) -> i64 {
        self.rng.gen_range(1..=window)
    }
}

impl Default for BaseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_unit_interval() {
        let mut generator = BaseGenerator::with_seed(7);
        for _ in 0..1000 {
            let value = generator.random();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn random_n_stays_below_max() {
        let mut generator = BaseGenerator::with_seed(7);
        for _ in 0..1000 {
            assert!(generator.random_n(10) < 10);
        }
    }

    #[test]
    fn random_n_zero_max() {
        let mut generator = BaseGenerator::with_seed(7);
        assert_eq!(generator.random_n(0), 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = BaseGenerator::with_seed(99);
        let mut b = BaseGenerator::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.uuid(), b.uuid());
            assert_eq!(a.string(15), b.string(15));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = BaseGenerator::with_seed(1);
        let mut b = BaseGenerator::with_seed(2);
        let streams_differ = (0..10).any(|_| a.uuid() != b.uuid());
        assert!(streams_differ);
    }

    #[test]
    fn past_date_is_strictly_earlier() {
        let mut generator = BaseGenerator::with_seed(3);
        let reference = Utc::now();
        for _ in 0..100 {
            assert!(generator.past_date_before(reference) < reference);
        }
    }

    #[test]
    fn future_date_is_strictly_later() {
        let mut generator = BaseGenerator::with_seed(3);
        let reference = Utc::now();
        for _ in 0..100 {
            assert!(generator.future_date(reference) > reference);
        }
    }

    #[test]
    fn string_is_alphanumeric_of_requested_length() {
        let mut generator = BaseGenerator::with_seed(11);
        let value = generator.string(15);
        assert_eq!(value.len(), 15);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn user_comes_from_pool() {
        let mut generator = BaseGenerator::with_seed(11);
        let user = generator.user();
        assert!(USERS.contains(&user.as_str()));
    }

    #[test]
    fn search_hit_wraps_source() {
        let mut generator = BaseGenerator::with_seed(5);
        let hit = generator.search_hit("some-index", 42u32);
        assert_eq!(hit.index, "some-index");
        assert_eq!(hit.score, 1.0);
        assert_eq!(hit.source, 42);
        assert!(!hit.id.is_empty());
    }
}
