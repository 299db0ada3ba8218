use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::blog::{BlogPost, CreateBlogPostDto, UpdateBlogPostDto},
    repositories::blog_repo::BlogPostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogPostsRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogPostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>> {
        let posts = self.repo.get_blog_posts(published_only).await?;

        Ok(posts)
    }

    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost> {
        self.repo
            .get_blog_post_by_slug(slug)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn create_blog_post(&self, post: CreateBlogPostDto) -> Result<BlogPost> {
        let created = self.repo.create_blog_post(&post).await?;

        Ok(created)
    }

    pub async fn update_blog_post(
        &self,
        id_or_slug: &str,
        patch: UpdateBlogPostDto,
    ) -> Result<BlogPost> {
        let existing = self.resolve_post(id_or_slug).await?;

        self.repo
            .update_blog_post(existing.id, &patch)
            .await?
            .ok_or(Error::NotFound)
    }

    pub async fn delete_blog_post(&self, id_or_slug: &str) -> Result<()> {
        let existing = self.resolve_post(id_or_slug).await?;

        if !self.repo.delete_blog_post(existing.id).await? {
            return Err(Error::NotFound);
        }

        Ok(())
    }

    // Admin routes address posts by id, older frontend links by slug.
    async fn resolve_post(&self, id_or_slug: &str) -> Result<BlogPost> {
        if let Ok(id) = Uuid::parse_str(id_or_slug) {
            if let Some(post) = self.repo.get_blog_post_by_id(id).await? {
                return Ok(post);
            }
        }

        self.repo
            .get_blog_post_by_slug(id_or_slug)
            .await?
            .ok_or(Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryRepo;

    fn service() -> BlogService {
        BlogService::new(Arc::new(MemoryRepo::new()))
    }

    fn post_dto(slug: &str) -> CreateBlogPostDto {
        CreateBlogPostDto {
            title: "T".to_string(),
            slug: slug.to_string(),
            excerpt: "E".to_string(),
            content: "C".to_string(),
            cover_image: None,
            category: "News".to_string(),
            author: "A".to_string(),
            published: None,
        }
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let service = service();

        let patch = UpdateBlogPostDto {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let err = service
            .update_blog_post("unknown-id", patch)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn update_resolves_post_by_slug() {
        let service = service();
        let created = service.create_blog_post(post_dto("by-slug")).await.unwrap();

        let patch = UpdateBlogPostDto {
            published: Some(true),
            ..Default::default()
        };
        let updated = service.update_blog_post("by-slug", patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert!(updated.published);
    }

    #[tokio::test]
    async fn delete_resolves_post_by_id() {
        let service = service();
        let created = service.create_blog_post(post_dto("gone")).await.unwrap();

        service
            .delete_blog_post(&created.id.to_string())
            .await
            .unwrap();

        let err = service.get_blog_post_by_slug("gone").await.unwrap_err();
        assert!(matches!(err, Error::NotFound));

        let err = service
            .delete_blog_post(&created.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }
}
