use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::error::CustomError;
use crate::utils::helpers::full_name;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn display_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

/// A post as persisted in the `posts` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub author: Author,
    pub title: String,
    pub content: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created: DateTime<Utc>,
}

impl Post {
    pub fn new(new_post: NewPost) -> Self {
        Post {
            id: ObjectId::new(),
            author: new_post.author,
            title: new_post.title,
            content: new_post.content,
            // BSON dates carry milliseconds only
            created: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn apply(&mut self, changes: PostUpdate) {
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }

    pub fn author_name(&self) -> String {
        self.author.display_name()
    }
}

/// Fields supplied by a caller when creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

/// Mutable fields of a post; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }
}

/// External JSON shape of a post.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        PostResponse {
            id: post.id.to_hex(),
            author: post.author_name(),
            title: post.title.clone(),
            content: post.content.clone(),
            created: post.created,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorRequest {
    fn into_author(self) -> Result<Author, CustomError> {
        let first_name = self.first_name.ok_or_else(|| missing("author.firstName"))?;
        let last_name = self.last_name.ok_or_else(|| missing("author.lastName"))?;
        Ok(Author {
            first_name,
            last_name,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorRequest>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, CustomError> {
        let author = self.author.ok_or_else(|| missing("author"))?.into_author()?;
        let title = self.title.ok_or_else(|| missing("title"))?;
        let content = self.content.ok_or_else(|| missing("content"))?;
        Ok(NewPost {
            author,
            title,
            content,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub author: Option<AuthorRequest>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(self, path_id: &str) -> Result<PostUpdate, CustomError> {
        if let Some(body_id) = &self.id {
            if body_id != path_id {
                return Err(CustomError::BadRequestError(format!(
                    "Request path id ({}) and request body id ({}) must match",
                    path_id, body_id
                )));
            }
        }

        let changes = PostUpdate {
            author: self.author.map(AuthorRequest::into_author).transpose()?,
            title: self.title,
            content: self.content,
        };

        if changes.is_empty() {
            return Err(CustomError::ValidationError(
                "Request body must include at least one of `author`, `title`, `content`".into(),
            ));
        }

        Ok(changes)
    }
}

fn missing(field: &str) -> CustomError {
    CustomError::ValidationError(format!("Missing `{}` in request body", field))
}
