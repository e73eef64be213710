//! Seed record types.
//!
//! Records are plain data with their identifiers already assigned, so posts,
//! likes and comments can reference parents without reading anything back
//! from storage. They are independent of any persistence representation and
//! serialise with camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cuisine::Cuisine;

/// Pre-computed bcrypt hash shared by every seeded user (plain text
/// `password123`). It is opaque to this crate.
pub const SEEDED_PASSWORD_HASH: &str =
    "$2b$10$K7L1OJ45/4Y2nIvhRVpCe.FSmhDdWoXehVzJptJ/op0lSsvqNu/1u";

/// A generated user.
///
/// # Example
///
/// ```
/// use seed_data::{SEEDED_PASSWORD_HASH, UserSeed};
/// use uuid::Uuid;
///
/// let user = UserSeed {
///     id: Uuid::nil(),
///     username: "ada".to_owned(),
///     email: "ada@example.com".to_owned(),
///     name: "Ada Lovelace".to_owned(),
///     password: SEEDED_PASSWORD_HASH.to_owned(),
///     bio: None,
///     avatar: None,
/// };
///
/// let json = serde_json::to_value(&user).expect("serialise");
/// assert_eq!(json["username"], "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Record identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password hash; always [`SEEDED_PASSWORD_HASH`].
    pub password: String,
    /// Optional profile blurb.
    pub bio: Option<String>,
    /// Optional avatar image URL.
    pub avatar: Option<String>,
}

/// A generated restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSeed {
    /// Record identifier.
    pub id: Uuid,
    /// Display name, e.g. `"Trattoria Rossi Napoli"`.
    pub name: String,
    /// Cuisine served.
    pub cuisine: Cuisine,
    /// Short description.
    pub description: String,
    /// Street address line.
    pub address: String,
    /// City name. Not correlated with the coordinates.
    pub city: String,
    /// State name. Not correlated with the coordinates.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Latitude inside the seeding metro area.
    pub latitude: f64,
    /// Longitude inside the seeding metro area.
    pub longitude: f64,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Website URL.
    pub website: String,
    /// Average rating in `[3.0, 5.0]` with one decimal.
    pub rating: f64,
    /// Whether the restaurant is currently open.
    pub is_open: bool,
}

/// A generated review post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSeed {
    /// Record identifier.
    pub id: Uuid,
    /// Author; a user created in the same run.
    pub user_id: Uuid,
    /// Subject; a restaurant created in the same run.
    pub restaurant_id: Uuid,
    /// Review text.
    pub content: String,
    /// Optional star rating in `[3, 5]`.
    pub rating: Option<u8>,
    /// Optional photo URL.
    pub image_url: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Always equal to `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// A generated like of a post by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeSeed {
    /// Record identifier.
    pub id: Uuid,
    /// User who liked the post.
    pub user_id: Uuid,
    /// Post that was liked.
    pub post_id: Uuid,
}

/// A generated comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSeed {
    /// Record identifier.
    pub id: Uuid,
    /// Commenting user.
    pub user_id: Uuid,
    /// Post commented on.
    pub post_id: Uuid,
    /// Comment text.
    pub content: String,
    /// Creation instant, never before the post's own.
    pub created_at: DateTime<Utc>,
}
