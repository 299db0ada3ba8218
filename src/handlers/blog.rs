use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    models::{
        blog::{CreateBlogPostDto, ListBlogPostsQuery, UpdateBlogPostDto},
        response::Response,
    },
    AppState, Result,
};

pub fn blog_handler() -> Router {
    Router::new()
        .route("/", get(get_blog_posts).post(create_blog_post))
        .route(
            "/{slug}",
            get(get_blog_post)
                .patch(update_blog_post)
                .delete(delete_blog_post),
        )
}

async fn get_blog_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<ListBlogPostsQuery>,
) -> Result<impl IntoResponse> {
    let published_only = !query.all.unwrap_or(false);
    let posts = app_state.blog_service.get_blog_posts(published_only).await?;

    Ok((StatusCode::OK, Json(posts)))
}

async fn get_blog_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let post = app_state.blog_service.get_blog_post_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(post)))
}

async fn create_blog_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(new_post): Json<CreateBlogPostDto>,
) -> Result<impl IntoResponse> {
    new_post.validate()?;

    let post = app_state.blog_service.create_blog_post(new_post).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_blog_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch_post): Json<UpdateBlogPostDto>,
) -> Result<impl IntoResponse> {
    patch_post.validate()?;

    let updated = app_state
        .blog_service
        .update_blog_post(&id, patch_post)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

async fn delete_blog_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    app_state.blog_service.delete_blog_post(&id).await?;

    Ok((
        StatusCode::OK,
        Json(Response {
            status: "success",
            message: "Blog post deleted successfully".to_string(),
        }),
    ))
}
