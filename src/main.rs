#![allow(async_fn_in_trait)]

mod config;
mod context;
mod core;
mod database;
mod error;
mod handlers;
mod impls;
mod middlewares;
mod response;

use crate::config::{Config, Storage, TokenTtl};
use crate::core::ports::document::DocumentStore;
use crate::core::services::user::seed_admin;
use crate::database::json::JsonStore;
use crate::impls::documents::{file::FileDocument, memory::MemoryDocument};
use crate::impls::tokener::jwt::JWT;
use actix_web::web::Data;
use actix_web::{middleware::Logger, App, HttpServer};

async fn serve<D>(config: Config, documents: D) -> anyhow::Result<()>
where
    D: DocumentStore + Clone + Send + 'static,
{
    if let Some(admin) = &config.admin {
        seed_admin(&mut JsonStore::new(documents.clone()), admin).await?;
    }
    let tokener = JWT::new(config.jwt_secret.into_bytes());
    let ttl = TokenTtl(config.token_ttl);
    log::info!("listening on {}:{}", config.bind_addr, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(documents.clone()))
            .configure(|cfg| handlers::configure::<D>(cfg, tokener.clone(), ttl))
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::from_env()?;
    match config.storage.clone() {
        Storage::File(path) => {
            let documents = FileDocument::new(path);
            documents.initialize().await?;
            log::info!("using document {}", documents.path().display());
            serve(config, documents).await
        }
        Storage::Memory => {
            log::warn!("using in-memory document, data is lost on exit");
            serve(config, MemoryDocument::default()).await
        }
    }
}
