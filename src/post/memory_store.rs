//! In-memory post store, used when no MongoDB instance is wanted.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::post::post_store::{PostStore, post_not_found};
use crate::utils::error::CustomError;

/// Posts kept in a vector behind an async RwLock, preserving insertion order.
///
/// Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, CustomError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, CustomError> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == object_id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, CustomError> {
        let post = Post::new(new_post);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostUpdate) -> Result<Post, CustomError> {
        let object_id = parse_id(id).ok_or_else(|| post_not_found(id))?;
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == object_id)
            .ok_or_else(|| post_not_found(id))?;
        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), CustomError> {
        let object_id = parse_id(id).ok_or_else(|| post_not_found(id))?;
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == object_id)
            .ok_or_else(|| post_not_found(id))?;
        posts.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<u64, CustomError> {
        Ok(self.posts.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post_model::Author;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            author: Author {
                first_name: "Alan".into(),
                last_name: "Turing".into(),
            },
            title: title.into(),
            content: "On computable numbers".into(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryPostStore::new();
        let created = store.create(new_post("first")).await.unwrap();

        let found = store.find_by_id(&created.id.to_hex()).await.unwrap().unwrap();
        assert_eq!(found.title, "first");
        assert_eq!(found.created, created.created);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryPostStore::new();
        for title in ["a", "b", "c"] {
            store.create(new_post(title)).await.unwrap();
        }
        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_with_invalid_id_is_none() {
        let store = InMemoryPostStore::new();
        assert!(store.find_by_id("not-an-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let store = InMemoryPostStore::new();
        let changes = PostUpdate {
            title: Some("x".into()),
            ..Default::default()
        };
        let result = store.update(&ObjectId::new().to_hex(), changes).await;
        assert!(matches!(result, Err(CustomError::NotFoundError(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let store = InMemoryPostStore::new();
        let created = store.create(new_post("gone")).await.unwrap();
        let id = created.id.to_hex();

        store.delete_by_id(&id).await.unwrap();
        assert!(store.find_by_id(&id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_by_id(&id).await,
            Err(CustomError::NotFoundError(_))
        ));
    }
}
