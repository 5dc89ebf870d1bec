use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::post::post_store::{PostStore, post_not_found};
use crate::utils::error::{CustomError, storage_error};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};

pub const POSTS_COLLECTION: &str = "posts";

/// MongoDB-backed post store over a single collection.
pub struct PostService {
    collection: Collection<Post>,
}

impl PostService {
    pub fn new(client: &Client, database_name: &str) -> Self {
        let collection = client
            .database(database_name)
            .collection::<Post>(POSTS_COLLECTION);
        PostService { collection }
    }
}

fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl PostStore for PostService {
    async fn list_all(&self) -> Result<Vec<Post>, CustomError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(storage_error("Failed to fetch posts"))?;

        let posts: Vec<Post> = cursor
            .try_collect()
            .await
            .map_err(storage_error("Failed to collect posts"))?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, CustomError> {
        let Some(object_id) = parse_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(storage_error("Failed to fetch post"))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, CustomError> {
        let post = Post::new(new_post);

        self.collection
            .insert_one(&post)
            .await
            .map_err(storage_error("Failed to create post"))?;

        log::info!("Created post {}", post.id.to_hex());
        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostUpdate) -> Result<Post, CustomError> {
        let object_id = parse_id(id).ok_or_else(|| post_not_found(id))?;

        let mut set = Document::new();
        if let Some(author) = changes.author {
            set.insert(
                "author",
                doc! { "firstName": author.first_name, "lastName": author.last_name },
            );
        }
        if let Some(title) = changes.title {
            set.insert("title", title);
        }
        if let Some(content) = changes.content {
            set.insert("content", content);
        }

        // Nothing to write; still report whether the post exists.
        if set.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| post_not_found(id));
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(storage_error("Failed to update post"))?
            .ok_or_else(|| post_not_found(id))?;

        log::info!("Updated post {}", id);
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), CustomError> {
        let object_id = parse_id(id).ok_or_else(|| post_not_found(id))?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(storage_error("Failed to delete post"))?;

        if result.deleted_count == 0 {
            return Err(post_not_found(id));
        }

        log::info!("Deleted post {}", id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, CustomError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(storage_error("Failed to count posts"))
    }
}
