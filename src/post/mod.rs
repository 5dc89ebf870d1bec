pub mod memory_store;
pub mod post_controller;
pub mod post_index;
pub mod post_model;
pub mod post_service;
pub mod post_store;

pub use memory_store::InMemoryPostStore;
pub use post_model::{Author, NewPost, Post, PostResponse, PostUpdate};
pub use post_service::PostService;
pub use post_store::PostStore;
