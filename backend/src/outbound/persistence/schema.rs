//! Diesel table definitions for the feed schema.
//!
//! Must match `migrations/` exactly. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Registered users. `username` and `email` are unique.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        email -> Varchar,
        name -> Varchar,
        /// bcrypt hash.
        password -> Varchar,
        bio -> Nullable<Text>,
        avatar -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Restaurants reviewed by posts.
    restaurants (id) {
        id -> Uuid,
        name -> Varchar,
        cuisine -> Varchar,
        description -> Text,
        address -> Varchar,
        city -> Varchar,
        state -> Varchar,
        zip_code -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
        phone -> Varchar,
        email -> Varchar,
        website -> Varchar,
        /// One decimal place, 3.0 to 5.0.
        rating -> Float8,
        is_open -> Bool,
    }
}

diesel::table! {
    /// Reviews written by a user about a restaurant.
    posts (id) {
        id -> Uuid,
        user_id -> Uuid,
        restaurant_id -> Uuid,
        content -> Text,
        rating -> Nullable<Int2>,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (user, post) pair.
    likes (id) {
        id -> Uuid,
        user_id -> Uuid,
        post_id -> Uuid,
    }
}

diesel::table! {
    comments (id) {
        id -> Uuid,
        user_id -> Uuid,
        post_id -> Uuid,
        content -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(posts -> users (user_id));
diesel::joinable!(posts -> restaurants (restaurant_id));
diesel::joinable!(likes -> posts (post_id));
diesel::joinable!(comments -> posts (post_id));

diesel::allow_tables_to_appear_in_same_query!(comments, likes, posts, restaurants, users);
