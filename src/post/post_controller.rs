use crate::post::post_model::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::post::post_store::{PostStore, post_not_found};
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

/// GET /posts
pub async fn get_posts(store: web::Data<dyn PostStore>) -> Result<HttpResponse, CustomError> {
    let posts = store.list_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<String>,
    store: web::Data<dyn PostStore>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let post = store
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| post_not_found(&post_id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(&post)))
}

/// POST /posts
pub async fn create_post(
    store: web::Data<dyn PostStore>,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let new_post = body.into_inner().validate()?;
    let post = store.create(new_post).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(&post)))
}

/// PUT /posts/{id}
///
/// Responds 201 with the updated post.
pub async fn update_post(
    post_id: web::Path<String>,
    store: web::Data<dyn PostStore>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    let changes = body.into_inner().validate(&post_id)?;
    let post = store.update(&post_id, changes).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(&post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    post_id: web::Path<String>,
    store: web::Data<dyn PostStore>,
) -> Result<HttpResponse, CustomError> {
    store.delete_by_id(&post_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
