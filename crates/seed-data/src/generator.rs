//! Record generators.
//!
//! Each generator draws from a [`FakeDataProvider`] and returns plain seed
//! records. Parents are passed in as slices of records created earlier in
//! the same run, so every reference is valid by construction.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::content::{COMMENT_TEXTS, REVIEW_TEXTS, pick_text};
use crate::cuisine::{Cuisine, restaurant_name};
use crate::error::GenerationError;
use crate::provider::FakeDataProvider;
use crate::records::{
    CommentSeed, LikeSeed, PostSeed, RestaurantSeed, SEEDED_PASSWORD_HASH, UserSeed,
};

/// Maximum draws for a unique username or email before giving up.
pub const MAX_UNIQUE_ATTEMPTS: usize = 100;

/// Upper bound on likes per post.
pub const MAX_LIKES_PER_POST: u32 = 15;

/// Upper bound on comments per post.
pub const MAX_COMMENTS_PER_POST: u32 = 5;

/// Posts are dated within this many days before "now".
pub const POST_WINDOW_DAYS: u32 = 30;

const BIO_PROBABILITY: f64 = 0.7;
const AVATAR_PROBABILITY: f64 = 0.9;
const POST_RATING_PROBABILITY: f64 = 0.8;
const POST_IMAGE_PROBABILITY: f64 = 0.9;
const OPEN_PROBABILITY: f64 = 0.85;

const MIN_RESTAURANT_RATING: f64 = 3.0;
const MAX_RESTAURANT_RATING: f64 = 5.0;
const MIN_POST_RATING: u32 = 3;
const MAX_POST_RATING: u32 = 5;

/// Bounding box of the seeding metro area (Mexico City).
const LATITUDE_RANGE: (f64, f64) = (19.20, 19.60);
const LONGITUDE_RANGE: (f64, f64) = (-99.30, -98.95);

/// Usernames and emails already issued during a run.
///
/// One instance lives for the duration of the user phase and is discarded
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct UsedValues {
    usernames: HashSet<String>,
    emails: HashSet<String>,
}

impl UsedValues {
    /// Creates empty used-sets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    /// Whether no user has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

fn draw_unique(
    set: &HashSet<String>,
    field: &'static str,
    mut draw: impl FnMut() -> String,
) -> Result<String, GenerationError> {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let candidate = draw();
        if !set.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(GenerationError::UniqueValueExhausted {
        field,
        attempts: MAX_UNIQUE_ATTEMPTS,
    })
}

/// Generates a user whose username and email are new to `used`.
///
/// Colliding values are redrawn up to [`MAX_UNIQUE_ATTEMPTS`] times each.
/// On success both values are recorded in `used`.
///
/// # Errors
///
/// Returns [`GenerationError::UniqueValueExhausted`] when the provider keeps
/// producing values already in use.
///
/// # Example
///
/// ```
/// use seed_data::{FakerProvider, UsedValues, generate_user};
///
/// let mut provider = FakerProvider::from_seed(1);
/// let mut used = UsedValues::new();
/// let first = generate_user(&mut provider, &mut used).expect("user");
/// let second = generate_user(&mut provider, &mut used).expect("user");
/// assert_ne!(first.username, second.username);
/// assert_eq!(used.len(), 2);
/// ```
pub fn generate_user(
    provider: &mut dyn FakeDataProvider,
    used: &mut UsedValues,
) -> Result<UserSeed, GenerationError> {
    let username = draw_unique(&used.usernames, "username", || provider.username())?;
    let email = draw_unique(&used.emails, "email", || provider.email())?;
    used.usernames.insert(username.clone());
    used.emails.insert(email.clone());

    let id = provider.uuid();
    let name = provider.person_name();
    let bio = provider
        .chance(BIO_PROBABILITY)
        .then(|| provider.sentence());
    let avatar = provider
        .chance(AVATAR_PROBABILITY)
        .then(|| provider.image_url());

    Ok(UserSeed {
        id,
        username,
        email,
        name,
        password: SEEDED_PASSWORD_HASH.to_owned(),
        bio,
        avatar,
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "ratings are stored with a single decimal place"
)]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Generates a restaurant with a random cuisine inside the metro area.
///
/// `city` and `state` are drawn independently of the coordinates.
pub fn generate_restaurant(provider: &mut dyn FakeDataProvider) -> RestaurantSeed {
    let id = provider.uuid();
    let cuisine = Cuisine::random(provider);
    let name = restaurant_name(provider, cuisine);
    let description = provider.sentence();
    let address = provider.street_address();
    let city = provider.city();
    let state = provider.state();
    let zip_code = provider.zip_code();
    let latitude = provider.float_in_range(LATITUDE_RANGE.0, LATITUDE_RANGE.1);
    let longitude = provider.float_in_range(LONGITUDE_RANGE.0, LONGITUDE_RANGE.1);
    let phone = provider.phone_number();
    let email = provider.email();
    let website = provider.url();
    let rating = round_to_tenth(
        provider.float_in_range(MIN_RESTAURANT_RATING, MAX_RESTAURANT_RATING),
    )
    .clamp(MIN_RESTAURANT_RATING, MAX_RESTAURANT_RATING);
    let is_open = provider.chance(OPEN_PROBABILITY);

    RestaurantSeed {
        id,
        name,
        cuisine,
        description,
        address,
        city,
        state,
        zip_code,
        latitude,
        longitude,
        phone,
        email,
        website,
        rating,
        is_open,
    }
}

fn pick<'a, T>(
    provider: &mut dyn FakeDataProvider,
    items: &'a [T],
    pool: &'static str,
) -> Result<&'a T, GenerationError> {
    provider
        .pick_index(items.len())
        .and_then(|index| items.get(index))
        .ok_or(GenerationError::EmptyPool { pool })
}

/// Generates a post by a random user about a random restaurant.
///
/// Both parents are drawn uniformly from the supplied slices. The post is
/// dated within [`POST_WINDOW_DAYS`] before `now`, and `updated_at` equals
/// `created_at`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] when either slice is empty.
pub fn generate_post(
    provider: &mut dyn FakeDataProvider,
    users: &[UserSeed],
    restaurants: &[RestaurantSeed],
    now: DateTime<Utc>,
) -> Result<PostSeed, GenerationError> {
    let user_id = pick(provider, users, "user")?.id;
    let restaurant_id = pick(provider, restaurants, "restaurant")?.id;
    let id = provider.uuid();
    let content = pick_text(provider, REVIEW_TEXTS);
    let rating = provider
        .chance(POST_RATING_PROBABILITY)
        .then(|| provider.int_in_range(MIN_POST_RATING, MAX_POST_RATING))
        .and_then(|stars| u8::try_from(stars).ok());
    let image_url = provider
        .chance(POST_IMAGE_PROBABILITY)
        .then(|| provider.image_url());
    let created_at = provider.recent_instant(now, POST_WINDOW_DAYS);

    Ok(PostSeed {
        id,
        user_id,
        restaurant_id,
        content,
        rating,
        image_url,
        created_at,
        updated_at: created_at,
    })
}

/// Samples between zero and [`MAX_LIKES_PER_POST`] distinct likers for `post`.
///
/// The sample never repeats a user and never exceeds the user pool.
pub fn sample_likes(
    provider: &mut dyn FakeDataProvider,
    users: &[UserSeed],
    post: &PostSeed,
) -> Vec<LikeSeed> {
    let wanted = provider.int_in_range(0, MAX_LIKES_PER_POST);
    let amount = usize::try_from(wanted).unwrap_or(usize::MAX);
    provider
        .sample_indices(users.len(), amount)
        .into_iter()
        .filter_map(|index| users.get(index))
        .map(|user| LikeSeed {
            id: provider.uuid(),
            user_id: user.id,
            post_id: post.id,
        })
        .collect()
}

/// Generates between zero and [`MAX_COMMENTS_PER_POST`] comments on `post`.
///
/// Each comment is dated between the post's `created_at` and `now`. An empty
/// user pool yields no comments.
pub fn generate_comments(
    provider: &mut dyn FakeDataProvider,
    users: &[UserSeed],
    post: &PostSeed,
    now: DateTime<Utc>,
) -> Vec<CommentSeed> {
    if users.is_empty() {
        return Vec::new();
    }
    let count = provider.int_in_range(0, MAX_COMMENTS_PER_POST);
    let mut comments = Vec::new();
    for _ in 0..count {
        let Ok(author) = pick(provider, users, "user") else {
            break;
        };
        comments.push(CommentSeed {
            id: provider.uuid(),
            user_id: author.id,
            post_id: post.id,
            content: pick_text(provider, COMMENT_TEXTS),
            created_at: provider.instant_between(post.created_at, now),
        });
    }
    comments
}
