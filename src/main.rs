use std::sync::Arc;

use config::Config;
use dotenv::dotenv;
use repositories::{
    blog_repo::BlogPostsRepository, contact_repo::ContactRepository, MemoryRepo, PostgresRepo,
};
use routes::{configure_cors, create_router};
use services::{blog::BlogService, contact::ContactService};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod mail;
mod models;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub contact_service: ContactService,
    pub blog_service: BlogService,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::init();

    let (contact_repo, blog_repo): (Arc<dyn ContactRepository>, Arc<dyn BlogPostsRepository>) =
        match &config.database_url {
            Some(database_url) => {
                let pool = match PgPoolOptions::new()
                    .max_connections(10)
                    .connect(database_url)
                    .await
                {
                    Ok(pool) => {
                        println!("✅ Connection to the database is successful!");
                        pool
                    }
                    Err(err) => {
                        println!("🔥 Failed to connect to the database: {:?}", err);
                        std::process::exit(1);
                    }
                };

                if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
                    println!("🔥 Failed to run database migrations: {:?}", err);
                    std::process::exit(1);
                }

                let repo = PostgresRepo::new(pool);
                (Arc::new(repo.clone()), Arc::new(repo))
            }
            None => {
                println!("⚠️ DATABASE_URL is not set, using in-memory storage (data is lost on restart)");
                let repo = MemoryRepo::new();
                (Arc::new(repo.clone()), Arc::new(repo))
            }
        };

    let app_state = AppState {
        config: config.clone(),
        contact_service: ContactService::new(contact_repo),
        blog_service: BlogService::new(blog_repo),
    };

    let app = create_router(Arc::new(app_state)).layer(configure_cors());

    let listener = tokio::net::TcpListener::bind(format!("[::]:{}", config.port))
        .await
        .unwrap();
    println!("🚀 Server listening on port {}", config.port);
    axum::serve(listener, app).await.unwrap();
}
