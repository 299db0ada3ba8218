use std::sync::Arc;

use crate::{
    models::contact::{ContactSubmission, CreateContactDto},
    repositories::contact_repo::ContactRepository,
    Result,
};

#[derive(Clone)]
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_contact_submission(
        &self,
        contact: CreateContactDto,
    ) -> Result<ContactSubmission> {
        let submission = self.repo.create_contact_submission(&contact).await?;

        Ok(submission)
    }

    pub async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let submissions = self.repo.get_contact_submissions().await?;

        Ok(submissions)
    }
}
