//! Shared test helpers: app construction, random post generation, and
//! store seeding.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use rand::Rng;
use rand::seq::SliceRandom;

use api_server::handlers::configure_routes;
use api_server::state::AppState;

use quill_core::domain::Post;
use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;
use quill_shared::dto::{AuthorDto, CreatePostRequest};

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];
const WORDS: &[&str] = &[
    "systems", "latency", "parser", "borrow", "checker", "async", "runtime", "journal", "index",
    "commit",
];

/// The real application mounted over an isolated store instance.
pub fn test_app(
    store: Arc<InMemoryPostStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(AppState::with_store(store)))
        .configure(configure_routes)
}

fn words(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| *WORDS.choose(rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random candidate post, independent of any store. Reused for bulk
/// seeding and for individual create tests.
pub fn random_post(rng: &mut impl Rng) -> CreatePostRequest {
    let title_len = rng.gen_range(2..5);
    let content_len = rng.gen_range(5..12);

    CreatePostRequest {
        title: words(rng, title_len),
        content: words(rng, content_len),
        author: AuthorDto {
            first_name: FIRST_NAMES.choose(rng).unwrap().to_string(),
            last_name: LAST_NAMES.choose(rng).unwrap().to_string(),
        },
        created: None,
    }
}

/// Insert `count` random posts directly through the store, returning the
/// persisted records in insertion order.
pub async fn seed_posts(
    store: &InMemoryPostStore,
    rng: &mut impl Rng,
    count: usize,
) -> Vec<Post> {
    let mut seeded = Vec::with_capacity(count);
    for _ in 0..count {
        let candidate = random_post(rng);
        seeded.push(store.insert(candidate.into()).await.unwrap());
    }
    seeded
}
