//! Internal Diesel row structs.
//!
//! These borrow from the seed records and never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use seed_data::{CommentSeed, LikeSeed, PostSeed, RestaurantSeed, UserSeed};
use uuid::Uuid;

use super::schema::{comments, likes, posts, restaurants, users};

/// Insertable user row. `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub bio: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

impl<'a> From<&'a UserSeed> for NewUserRow<'a> {
    fn from(user: &'a UserSeed) -> Self {
        Self {
            id: user.id,
            username: &user.username,
            email: &user.email,
            name: &user.name,
            password: &user.password,
            bio: user.bio.as_deref(),
            avatar: user.avatar.as_deref(),
        }
    }
}

/// Insertable restaurant row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub cuisine: &'a str,
    pub description: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: &'a str,
    pub email: &'a str,
    pub website: &'a str,
    pub rating: f64,
    pub is_open: bool,
}

impl<'a> From<&'a RestaurantSeed> for NewRestaurantRow<'a> {
    fn from(restaurant: &'a RestaurantSeed) -> Self {
        Self {
            id: restaurant.id,
            name: &restaurant.name,
            cuisine: restaurant.cuisine.as_str(),
            description: &restaurant.description,
            address: &restaurant.address,
            city: &restaurant.city,
            state: &restaurant.state,
            zip_code: &restaurant.zip_code,
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
            phone: &restaurant.phone,
            email: &restaurant.email,
            website: &restaurant.website,
            rating: restaurant.rating,
            is_open: restaurant.is_open,
        }
    }
}

/// Insertable post row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub content: &'a str,
    pub rating: Option<i16>,
    pub image_url: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a PostSeed> for NewPostRow<'a> {
    fn from(post: &'a PostSeed) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            restaurant_id: post.restaurant_id,
            content: &post.content,
            rating: post.rating.map(i16::from),
            image_url: post.image_url.as_deref(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = likes)]
pub(crate) struct NewLikeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
}

impl From<&LikeSeed> for NewLikeRow {
    fn from(like: &LikeSeed) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            post_id: like.post_id,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub content: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a CommentSeed> for NewCommentRow<'a> {
    fn from(comment: &'a CommentSeed) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            post_id: comment.post_id,
            content: &comment.content,
            created_at: comment.created_at,
        }
    }
}
