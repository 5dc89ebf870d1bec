use async_trait::async_trait;

use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::utils::error::CustomError;

/// Persistence operations on the posts collection.
///
/// Ids are taken as strings as they arrive from the path; an id that does not
/// parse is treated as unknown rather than malformed.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in insertion order.
    async fn list_all(&self) -> Result<Vec<Post>, CustomError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, CustomError>;

    async fn create(&self, new_post: NewPost) -> Result<Post, CustomError>;

    /// Replace the supplied mutable fields and return the updated post.
    async fn update(&self, id: &str, changes: PostUpdate) -> Result<Post, CustomError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), CustomError>;

    async fn count(&self) -> Result<u64, CustomError>;
}

pub(crate) fn post_not_found(id: &str) -> CustomError {
    CustomError::NotFoundError(format!("Post with id {} not found", id))
}
