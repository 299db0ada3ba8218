use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{MemoryRepo, PostgresRepo};
use crate::{
    models::contact::{ContactSubmission, CreateContactDto},
    Result,
};

#[async_trait]
pub trait ContactRepository: Sync + Send {
    async fn create_contact_submission(
        &self,
        contact: &CreateContactDto,
    ) -> Result<ContactSubmission>;
    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>>;
}

#[async_trait]
impl ContactRepository for PostgresRepo {
    async fn create_contact_submission(
        &self,
        contact: &CreateContactDto,
    ) -> Result<ContactSubmission> {
        let id = Uuid::now_v7();

        let submission = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (id, name, email, company, message, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, name, email, company, message, created_at
            "#,
        )
        .bind(id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.company)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let submissions = sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT id, name, email, company, message, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }
}

#[async_trait]
impl ContactRepository for MemoryRepo {
    async fn create_contact_submission(
        &self,
        contact: &CreateContactDto,
    ) -> Result<ContactSubmission> {
        let submission = ContactSubmission {
            id: Uuid::now_v7(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            company: contact.company.clone(),
            message: contact.message.clone(),
            created_at: Utc::now(),
        };

        self.contacts
            .write()
            .await
            .insert(submission.id, submission.clone());

        Ok(submission)
    }

    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let mut submissions: Vec<ContactSubmission> =
            self.contacts.read().await.values().cloned().collect();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(submissions)
    }
}
