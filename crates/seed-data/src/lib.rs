//! Randomised, referentially consistent seed data for the food feed.
//!
//! The crate produces users, restaurants, posts, likes and comments as plain
//! records. It performs no I/O: callers persist the records and decide the
//! order of insertion. Every random value is drawn through
//! [`FakeDataProvider`], so a run seeded with the same value yields the same
//! records.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use seed_data::{
//!     FakerProvider, UsedValues, generate_post, generate_restaurant, generate_user,
//! };
//!
//! let mut provider = FakerProvider::from_seed(42);
//! let mut used = UsedValues::new();
//! let users = vec![generate_user(&mut provider, &mut used).expect("user")];
//! let restaurants = vec![generate_restaurant(&mut provider)];
//!
//! let post = generate_post(&mut provider, &users, &restaurants, Utc::now()).expect("post");
//! assert_eq!(post.user_id, users[0].id);
//! assert_eq!(post.restaurant_id, restaurants[0].id);
//! ```

mod content;
mod cuisine;
mod error;
mod generator;
mod provider;
mod records;

pub use content::{COMMENT_TEXTS, REVIEW_TEXTS};
pub use cuisine::{Cuisine, NameTheme, UnknownCuisine, restaurant_name};
pub use error::GenerationError;
pub use generator::{
    MAX_COMMENTS_PER_POST, MAX_LIKES_PER_POST, MAX_UNIQUE_ATTEMPTS, POST_WINDOW_DAYS, UsedValues,
    generate_comments, generate_post, generate_restaurant, generate_user, sample_likes,
};
pub use provider::{FakeDataProvider, FakerProvider};
pub use records::{
    CommentSeed, LikeSeed, PostSeed, RestaurantSeed, SEEDED_PASSWORD_HASH, UserSeed,
};
