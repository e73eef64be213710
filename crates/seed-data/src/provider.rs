//! Fake-data provider abstraction.
//!
//! Generators never touch a process-wide RNG. They draw every random value
//! through [`FakeDataProvider`], so a run can be replayed from a seed or
//! driven by a scripted provider in tests.

use chrono::{DateTime, TimeDelta, Utc};
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::internet::raw::{DomainSuffix, FreeEmailProvider, Username};
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Number of words drawn for a generated sentence.
const SENTENCE_WORDS: std::ops::Range<usize> = 6..14;

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of random, realistic-looking values.
///
/// The shape of every value is deterministic (an email looks like an email);
/// only the content varies. Implementations must be `Send` so a seeding run
/// can hold the provider across suspension points.
pub trait FakeDataProvider: Send {
    /// A full person name, e.g. `"Ada Lovelace"`.
    fn person_name(&mut self) -> String;

    /// A surname on its own.
    fn last_name(&mut self) -> String;

    /// A login-style username.
    fn username(&mut self) -> String;

    /// An email address.
    fn email(&mut self) -> String;

    /// A short sentence of filler prose.
    fn sentence(&mut self) -> String;

    /// A URL pointing at a placeholder image.
    fn image_url(&mut self) -> String;

    /// A street address line.
    fn street_address(&mut self) -> String;

    /// A city name.
    fn city(&mut self) -> String;

    /// A state or region name.
    fn state(&mut self) -> String;

    /// A postal code.
    fn zip_code(&mut self) -> String;

    /// A phone number.
    fn phone_number(&mut self) -> String;

    /// A website URL.
    fn url(&mut self) -> String;

    /// A float in the inclusive range `[min, max]`.
    fn float_in_range(&mut self, min: f64, max: f64) -> f64;

    /// An integer in the inclusive range `[min, max]`.
    fn int_in_range(&mut self, min: u32, max: u32) -> u32;

    /// `true` with the given probability (clamped to `[0, 1]`).
    fn chance(&mut self, probability: f64) -> bool;

    /// An instant within the `days` preceding `now`.
    fn recent_instant(&mut self, now: DateTime<Utc>, days: u32) -> DateTime<Utc>;

    /// An instant in `[from, to]`; returns `from` when the bounds are inverted.
    fn instant_between(&mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> DateTime<Utc>;

    /// A uniformly chosen index into a collection of `len` items.
    ///
    /// Returns `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    /// `amount` distinct indices into a collection of `len` items.
    ///
    /// `amount` is clamped to `len`, so the result never repeats an index.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// A fresh record identifier.
    fn uuid(&mut self) -> Uuid;
}

/// [`FakeDataProvider`] backed by the `fake` crate and a ChaCha8 RNG.
///
/// # Example
///
/// ```
/// use seed_data::{FakeDataProvider, FakerProvider};
///
/// let mut first = FakerProvider::from_seed(7);
/// let mut second = FakerProvider::from_seed(7);
/// assert_eq!(first.username(), second.username());
/// ```
#[derive(Debug, Clone)]
pub struct FakerProvider {
    rng: ChaCha8Rng,
}

impl FakerProvider {
    /// Creates a provider whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a provider seeded from the thread-local RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a seeded provider when `seed` is set, otherwise an entropy one.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    fn slug(&mut self) -> String {
        let word: String = Word(EN).fake_with_rng(&mut self.rng);
        word.chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase()
    }
}

impl FakeDataProvider for FakerProvider {
    fn person_name(&mut self) -> String {
        let first: String = FirstName(EN).fake_with_rng(&mut self.rng);
        let last: String = LastName(EN).fake_with_rng(&mut self.rng);
        format!("{first} {last}")
    }

    fn last_name(&mut self) -> String {
        LastName(EN).fake_with_rng(&mut self.rng)
    }

    fn username(&mut self) -> String {
        let base: String = Username(EN).fake_with_rng(&mut self.rng);
        let suffix = self.rng.random_range(0..1000_u32);
        format!("{base}{suffix}")
    }

    fn email(&mut self) -> String {
        let first: String = FirstName(EN).fake_with_rng(&mut self.rng);
        let last: String = LastName(EN).fake_with_rng(&mut self.rng);
        let provider: String = FreeEmailProvider(EN).fake_with_rng(&mut self.rng);
        let tag = self.rng.random_range(0..10_000_u32);
        let local: String = format!("{first}.{last}{tag}")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
            .collect();
        format!("{}@{provider}", local.to_lowercase())
    }

    fn sentence(&mut self) -> String {
        Sentence(EN, SENTENCE_WORDS).fake_with_rng(&mut self.rng)
    }

    fn image_url(&mut self) -> String {
        let token = self.rng.random::<u32>();
        format!("https://picsum.photos/seed/{token:08x}/640/480")
    }

    fn street_address(&mut self) -> String {
        let number: String = BuildingNumber(EN).fake_with_rng(&mut self.rng);
        let street: String = StreetName(EN).fake_with_rng(&mut self.rng);
        format!("{number} {street}")
    }

    fn city(&mut self) -> String {
        CityName(EN).fake_with_rng(&mut self.rng)
    }

    fn state(&mut self) -> String {
        StateName(EN).fake_with_rng(&mut self.rng)
    }

    fn zip_code(&mut self) -> String {
        ZipCode(EN).fake_with_rng(&mut self.rng)
    }

    fn phone_number(&mut self) -> String {
        PhoneNumber(EN).fake_with_rng(&mut self.rng)
    }

    fn url(&mut self) -> String {
        let host = self.slug();
        let suffix: String = DomainSuffix(EN).fake_with_rng(&mut self.rng);
        format!("https://www.{host}.{suffix}")
    }

    fn float_in_range(&mut self, min: f64, max: f64) -> f64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(low..=high)
    }

    fn int_in_range(&mut self, min: u32, max: u32) -> u32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.rng.random_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn recent_instant(&mut self, now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
        let window = i64::from(days).saturating_mul(MILLIS_PER_DAY);
        let offset = self.rng.random_range(0..=window);
        now - TimeDelta::milliseconds(offset)
    }

    fn instant_between(&mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> DateTime<Utc> {
        let span = (to - from).num_milliseconds();
        if span <= 0 {
            return from;
        }
        from + TimeDelta::milliseconds(self.rng.random_range(0..=span))
    }

    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }

    fn uuid(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.random())
    }
}
