//! Shared fixtures: random post data and store seeding.

#![allow(dead_code)]

use blog_posts_api::post::{Author, NewPost, Post, PostStore};
use rand::Rng;
use serde_json::{Value, json};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Edsger", "Frances", "Grace", "Ken", "Linus", "Margaret",
];
const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Hamilton", "Hopper", "Liskov", "Lovelace", "Ritchie", "Thompson",
    "Torvalds", "Turing",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "magna", "aliqua",
];

pub const SEED_COUNT: usize = 10;

/// Route `log` output through the test harness so it shows with `--nocapture`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pick(items: &[&'static str]) -> &'static str {
    items[rand::rng().random_range(0..items.len())]
}

pub fn fake_author() -> Author {
    Author {
        first_name: pick(FIRST_NAMES).to_string(),
        last_name: pick(LAST_NAMES).to_string(),
    }
}

pub fn fake_sentence() -> String {
    let len = rand::rng().random_range(3..9);
    let words: Vec<&str> = (0..len).map(|_| pick(WORDS)).collect();
    format!("{}.", words.join(" "))
}

pub fn fake_text() -> String {
    let len = rand::rng().random_range(2..5);
    (0..len).map(|_| fake_sentence()).collect::<Vec<_>>().join(" ")
}

pub fn fake_post() -> NewPost {
    NewPost {
        author: fake_author(),
        title: fake_sentence(),
        content: fake_text(),
    }
}

/// Request body for `POST /posts` / `PUT /posts/{id}` built from random data.
pub fn fake_post_body() -> Value {
    let author = fake_author();
    json!({
        "author": { "firstName": author.first_name, "lastName": author.last_name },
        "title": fake_sentence(),
        "content": fake_text(),
    })
}

pub async fn seed_posts(store: &dyn PostStore) -> Vec<Post> {
    let mut seeded = Vec::with_capacity(SEED_COUNT);
    for _ in 0..SEED_COUNT {
        seeded.push(store.create(fake_post()).await.expect("seed post"));
    }
    seeded
}

pub fn expected_author(body: &Value) -> String {
    format!(
        "{} {}",
        body["author"]["firstName"].as_str().unwrap(),
        body["author"]["lastName"].as_str().unwrap()
    )
}

pub fn assert_post_keys(post: &Value) {
    let mut keys: Vec<&str> = post
        .as_object()
        .expect("post is an object")
        .keys()
        .map(|k| k.as_str())
        .collect();
    keys.sort();
    assert_eq!(keys, vec!["author", "content", "created", "id", "title"]);
}
