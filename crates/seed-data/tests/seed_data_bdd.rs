//! Behavioural tests for seed-data generation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use seed_data::{
    CommentSeed, Cuisine, FakerProvider, LikeSeed, PostSeed, RestaurantSeed, UsedValues,
    UserSeed, generate_comments, generate_post, generate_restaurant, generate_user,
    restaurant_name, sample_likes,
};

/// Records produced by one generation pass.
type Run = (Vec<UserSeed>, Vec<RestaurantSeed>, Vec<PostSeed>);

#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u64>,
    provider: Slot<FakerProvider>,
    users: Slot<Vec<UserSeed>>,
    restaurants: Slot<Vec<RestaurantSeed>>,
    posts: Slot<Vec<PostSeed>>,
    likes: Slot<Vec<LikeSeed>>,
    comments: Slot<Vec<CommentSeed>>,
    name: Slot<String>,
    runs: Slot<(Run, Run)>,
}

impl World {
    fn provider(&self) -> FakerProvider {
        self.provider.get().expect("provider should be set")
    }

    fn users(&self) -> Vec<UserSeed> {
        self.users.get().unwrap_or_default()
    }

    fn restaurants(&self) -> Vec<RestaurantSeed> {
        self.restaurants.get().unwrap_or_default()
    }

    fn posts(&self) -> Vec<PostSeed> {
        self.posts.get().unwrap_or_default()
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn make_users(provider: &mut FakerProvider, count: usize) -> Vec<UserSeed> {
    let mut used = UsedValues::new();
    (0..count)
        .map(|_| generate_user(provider, &mut used).expect("user generation"))
        .collect()
}

fn make_run(seed: u64) -> Run {
    let mut provider = FakerProvider::from_seed(seed);
    let users = make_users(&mut provider, 5);
    let restaurants: Vec<_> = (0..5).map(|_| generate_restaurant(&mut provider)).collect();
    let posts = (0..10)
        .map(|_| generate_post(&mut provider, &users, &restaurants, now()).expect("post"))
        .collect();
    (users, restaurants, posts)
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a provider seeded with {seed:u64}")]
fn a_provider_seeded_with(world: &World, seed: u64) {
    world.seed.set(seed);
    world.provider.set(FakerProvider::from_seed(seed));
}

#[given("{users:usize} users and {restaurants:usize} restaurants have been generated")]
fn users_and_restaurants_have_been_generated(world: &World, users: usize, restaurants: usize) {
    let mut provider = world.provider();
    let generated_users = make_users(&mut provider, users);
    let generated_restaurants = (0..restaurants)
        .map(|_| generate_restaurant(&mut provider))
        .collect();
    world.users.set(generated_users);
    world.restaurants.set(generated_restaurants);
    world.provider.set(provider);
}

#[given("{count:usize} posts have been generated")]
fn posts_have_been_generated(world: &World, count: usize) {
    store_posts(world, count);
}

#[when("{count:usize} users are generated")]
fn users_are_generated(world: &World, count: usize) {
    let mut provider = world.provider();
    world.users.set(make_users(&mut provider, count));
    world.provider.set(provider);
}

#[when("{count:usize} posts are generated")]
fn posts_are_generated(world: &World, count: usize) {
    store_posts(world, count);
}

fn store_posts(world: &World, count: usize) {
    let mut provider = world.provider();
    let users = world.users();
    let restaurants = world.restaurants();
    let posts = (0..count)
        .map(|_| generate_post(&mut provider, &users, &restaurants, now()).expect("post"))
        .collect();
    world.posts.set(posts);
    world.provider.set(provider);
}

#[when("engagement is generated for every post")]
fn engagement_is_generated(world: &World) {
    let mut provider = world.provider();
    let users = world.users();
    let mut likes = Vec::new();
    let mut comments = Vec::new();
    for post in world.posts() {
        likes.extend(sample_likes(&mut provider, &users, &post));
        comments.extend(generate_comments(&mut provider, &users, &post, now()));
    }
    world.likes.set(likes);
    world.comments.set(comments);
    world.provider.set(provider);
}

#[when("a Tailandesa restaurant name is synthesised")]
fn a_tailandesa_name_is_synthesised(world: &World) {
    let mut provider = world.provider();
    world
        .name
        .set(restaurant_name(&mut provider, Cuisine::Tailandesa));
}

#[when("the run is generated twice from that seed")]
fn the_run_is_generated_twice(world: &World) {
    let seed = world.seed.get().expect("seed should be set");
    world.runs.set((make_run(seed), make_run(seed)));
}

#[then("all usernames are distinct")]
fn all_usernames_are_distinct(world: &World) {
    let users = world.users();
    let distinct: HashSet<_> = users.iter().map(|u| u.username.clone()).collect();
    assert_eq!(distinct.len(), users.len());
}

#[then("all emails are distinct")]
fn all_emails_are_distinct(world: &World) {
    let users = world.users();
    let distinct: HashSet<_> = users.iter().map(|u| u.email.clone()).collect();
    assert_eq!(distinct.len(), users.len());
}

#[then("every post references a generated user and restaurant")]
fn every_post_references_generated_parents(world: &World) {
    let user_ids: HashSet<_> = world.users().iter().map(|u| u.id).collect();
    let restaurant_ids: HashSet<_> = world.restaurants().iter().map(|r| r.id).collect();
    let posts = world.posts();

    assert!(!posts.is_empty());
    for post in posts {
        assert!(user_ids.contains(&post.user_id), "unknown author");
        assert!(restaurant_ids.contains(&post.restaurant_id), "unknown restaurant");
    }
}

#[then("no post has more than 15 likes or a repeated liker")]
fn likes_are_bounded_and_unique(world: &World) {
    let likes = world.likes.get().expect("likes should be generated");
    for post in world.posts() {
        let likers: Vec<_> = likes
            .iter()
            .filter(|like| like.post_id == post.id)
            .map(|like| like.user_id)
            .collect();
        let distinct: HashSet<_> = likers.iter().collect();
        assert!(likers.len() <= 15);
        assert_eq!(distinct.len(), likers.len());
    }
}

#[then("every comment falls between its post and now")]
fn comments_follow_their_post(world: &World) {
    let comments = world.comments.get().expect("comments should be generated");
    let posts = world.posts();
    for comment in comments {
        let post = posts
            .iter()
            .find(|p| p.id == comment.post_id)
            .expect("comment references a generated post");
        assert!(comment.created_at >= post.created_at);
        assert!(comment.created_at <= now());
    }
}

#[then("the name starts with the generic prefix and is trimmed")]
fn the_name_uses_the_generic_prefix(world: &World) {
    let name = world.name.get().expect("name should be set");
    assert!(name.starts_with("Restaurant "), "unexpected name: {name}");
    assert_eq!(name.trim(), name);
    assert!(name.len() > "Restaurant ".len());
}

#[then("both runs are identical")]
fn both_runs_are_identical(world: &World) {
    let (first, second) = world.runs.get().expect("runs should be generated");
    assert_eq!(first, second);
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Users have distinct usernames and emails"
)]
fn users_have_distinct_usernames_and_emails(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Posts reference users and restaurants from the same run"
)]
fn posts_reference_same_run_parents(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Engagement respects post timing and like uniqueness"
)]
fn engagement_respects_timing_and_uniqueness(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "Cuisines without a themed vocabulary use the generic name"
)]
fn unthemed_cuisines_use_the_generic_name(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seed_data.feature",
    name = "The same seed replays the same records"
)]
fn same_seed_replays_same_records(world: World) {
    let _ = world;
}
