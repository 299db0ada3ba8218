use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{blog::BlogPost, contact::ContactSubmission};

pub mod blog_repo;
pub mod contact_repo;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Process-lifetime store used when no `DATABASE_URL` is configured.
/// Data does not survive a restart.
#[derive(Clone, Default)]
pub struct MemoryRepo {
    contacts: Arc<RwLock<HashMap<Uuid, ContactSubmission>>>,
    posts: Arc<RwLock<HashMap<Uuid, BlogPost>>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}
