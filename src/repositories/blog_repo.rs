use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{MemoryRepo, PostgresRepo};
use crate::{
    models::blog::{BlogPost, CreateBlogPostDto, UpdateBlogPostDto},
    Error, Result,
};

#[async_trait]
pub trait BlogPostsRepository: Sync + Send {
    async fn get_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>>;
    async fn get_blog_post_by_id(&self, id: Uuid) -> Result<Option<BlogPost>>;
    async fn create_blog_post(&self, post: &CreateBlogPostDto) -> Result<BlogPost>;
    async fn update_blog_post(
        &self,
        id: Uuid,
        patch: &UpdateBlogPostDto,
    ) -> Result<Option<BlogPost>>;
    async fn delete_blog_post(&self, id: Uuid) -> Result<bool>;
}

fn slug_taken_error() -> Error {
    Error::BadRequest("A post with this slug already exists".to_string())
}

const BLOG_POST_COLUMNS: &str =
    "id, title, slug, excerpt, content, cover_image, category, author, published, created_at, updated_at";

#[async_trait]
impl BlogPostsRepository for PostgresRepo {
    async fn get_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>> {
        let query = if published_only {
            format!(
                "SELECT {BLOG_POST_COLUMNS} FROM blog_posts WHERE published = TRUE ORDER BY created_at DESC"
            )
        } else {
            format!("SELECT {BLOG_POST_COLUMNS} FROM blog_posts ORDER BY created_at DESC")
        };

        let posts = sqlx::query_as::<_, BlogPost>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn get_blog_post_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create_blog_post(&self, post: &CreateBlogPostDto) -> Result<BlogPost> {
        let id = Uuid::now_v7();

        let created = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            INSERT INTO blog_posts
                (id, title, slug, excerpt, content, cover_image, category, author, published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING {BLOG_POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.cover_image)
        .bind(&post.category)
        .bind(&post.author)
        .bind(post.published.unwrap_or(false))
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => slug_taken_error(),
            _ => Error::from(err),
        })?;

        Ok(created)
    }

    async fn update_blog_post(
        &self,
        id: Uuid,
        patch: &UpdateBlogPostDto,
    ) -> Result<Option<BlogPost>> {
        let updated = sqlx::query_as::<_, BlogPost>(&format!(
            r#"
            UPDATE blog_posts
            SET title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                excerpt = COALESCE($4, excerpt),
                content = COALESCE($5, content),
                cover_image = COALESCE($6, cover_image),
                category = COALESCE($7, category),
                author = COALESCE($8, author),
                published = COALESCE($9, published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {BLOG_POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.slug)
        .bind(&patch.excerpt)
        .bind(&patch.content)
        .bind(&patch.cover_image)
        .bind(&patch.category)
        .bind(&patch.author)
        .bind(patch.published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => slug_taken_error(),
            _ => Error::from(err),
        })?;

        Ok(updated)
    }

    async fn delete_blog_post(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl BlogPostsRepository for MemoryRepo {
    async fn get_blog_posts(&self, published_only: bool) -> Result<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .read()
            .await
            .values()
            .filter(|post| !published_only || post.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let post = self
            .posts
            .read()
            .await
            .values()
            .find(|post| post.slug == slug)
            .cloned();

        Ok(post)
    }

    async fn get_blog_post_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create_blog_post(&self, post: &CreateBlogPostDto) -> Result<BlogPost> {
        let mut posts = self.posts.write().await;

        if posts.values().any(|existing| existing.slug == post.slug) {
            return Err(slug_taken_error());
        }

        let now = Utc::now();
        let created = BlogPost {
            id: Uuid::now_v7(),
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            cover_image: post.cover_image.clone(),
            category: post.category.clone(),
            author: post.author.clone(),
            published: post.published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        posts.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update_blog_post(
        &self,
        id: Uuid,
        patch: &UpdateBlogPostDto,
    ) -> Result<Option<BlogPost>> {
        let mut posts = self.posts.write().await;

        if let Some(new_slug) = &patch.slug {
            if posts
                .values()
                .any(|existing| existing.id != id && &existing.slug == new_slug)
            {
                return Err(slug_taken_error());
            }
        }

        let Some(existing) = posts.get(&id) else {
            return Ok(None);
        };

        let updated = BlogPost {
            id: existing.id,
            title: patch.title.clone().unwrap_or_else(|| existing.title.clone()),
            slug: patch.slug.clone().unwrap_or_else(|| existing.slug.clone()),
            excerpt: patch
                .excerpt
                .clone()
                .unwrap_or_else(|| existing.excerpt.clone()),
            content: patch
                .content
                .clone()
                .unwrap_or_else(|| existing.content.clone()),
            cover_image: patch
                .cover_image
                .clone()
                .or_else(|| existing.cover_image.clone()),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| existing.category.clone()),
            author: patch
                .author
                .clone()
                .unwrap_or_else(|| existing.author.clone()),
            published: patch.published.unwrap_or(existing.published),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        posts.insert(id, updated.clone());

        Ok(Some(updated))
    }

    async fn delete_blog_post(&self, id: Uuid) -> Result<bool> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_dto(title: &str, slug: &str) -> CreateBlogPostDto {
        CreateBlogPostDto {
            title: title.to_string(),
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
    async fn published_defaults_to_false() {
        let repo = MemoryRepo::new();

        let created = repo.create_blog_post(&post_dto("T", "t")).await.unwrap();
        assert!(!created.published);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let repo = MemoryRepo::new();

        let mut dto = post_dto("Launch", "launch");
        dto.cover_image = Some("/img/launch.webp".to_string());
        dto.published = Some(true);

        let created = repo.create_blog_post(&dto).await.unwrap();
        let fetched = repo
            .get_blog_post_by_id(created.id)
            .await
            .unwrap()
            .expect("post should exist");

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Launch");
        assert_eq!(fetched.slug, "launch");
        assert_eq!(fetched.cover_image.as_deref(), Some("/img/launch.webp"));
        assert!(fetched.published);
    }

    #[tokio::test]
    async fn get_by_slug_finds_created_post() {
        let repo = MemoryRepo::new();

        repo.create_blog_post(&post_dto("T", "hello-world"))
            .await
            .unwrap();

        let found = repo.get_blog_post_by_slug("hello-world").await.unwrap();
        assert_eq!(found.map(|post| post.slug), Some("hello-world".to_string()));

        let missing = repo.get_blog_post_by_slug("nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let repo = MemoryRepo::new();

        repo.create_blog_post(&post_dto("First", "same")).await.unwrap();
        let err = repo
            .create_blog_post(&post_dto("Second", "same"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn slug_change_onto_existing_slug_is_rejected() {
        let repo = MemoryRepo::new();

        repo.create_blog_post(&post_dto("First", "one")).await.unwrap();
        let second = repo.create_blog_post(&post_dto("Second", "two")).await.unwrap();

        let patch = UpdateBlogPostDto {
            slug: Some("one".to_string()),
            ..Default::default()
        };
        let err = repo.update_blog_post(second.id, &patch).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        // Re-sending a post's own slug is not a conflict.
        let patch = UpdateBlogPostDto {
            slug: Some("two".to_string()),
            ..Default::default()
        };
        assert!(repo
            .update_blog_post(second.id, &patch)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn publish_toggle_controls_list_visibility() {
        let repo = MemoryRepo::new();

        let created = repo.create_blog_post(&post_dto("T", "t")).await.unwrap();

        let public = repo.get_blog_posts(true).await.unwrap();
        assert!(public.is_empty());
        assert_eq!(repo.get_blog_posts(false).await.unwrap().len(), 1);

        let patch = UpdateBlogPostDto {
            published: Some(true),
            ..Default::default()
        };
        repo.update_blog_post(created.id, &patch).await.unwrap();

        let public = repo.get_blog_posts(true).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, created.id);
    }

    #[tokio::test]
    async fn update_merges_patch_and_bumps_updated_at() {
        let repo = MemoryRepo::new();

        let created = repo.create_blog_post(&post_dto("Old title", "t")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let patch = UpdateBlogPostDto {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let updated = repo
            .update_blog_post(created.id, &patch)
            .await
            .unwrap()
            .expect("post should exist");

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.slug, "t");
        assert_eq!(updated.category, "News");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let repo = MemoryRepo::new();

        let patch = UpdateBlogPostDto {
            title: Some("X".to_string()),
            ..Default::default()
        };
        let result = repo.update_blog_post(Uuid::now_v7(), &patch).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryRepo::new();

        let created = repo.create_blog_post(&post_dto("T", "t")).await.unwrap();

        assert!(repo.delete_blog_post(created.id).await.unwrap());
        assert!(!repo.delete_blog_post(created.id).await.unwrap());
        assert!(repo.get_blog_post_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_are_ordered_newest_first() {
        let repo = MemoryRepo::new();

        for slug in ["a", "b", "c"] {
            let mut dto = post_dto(slug, slug);
            dto.published = Some(true);
            repo.create_blog_post(&dto).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let posts = repo.get_blog_posts(true).await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|post| post.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b", "a"]);
    }
}
