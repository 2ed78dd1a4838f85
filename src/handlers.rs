pub mod response;
pub mod survey;

use crate::config::TokenTtl;
use crate::context::UserInfo;
use crate::core::models::user::{Login, Profile, Register, Session};
use crate::core::ports::document::DocumentStore;
use crate::core::services::user;
use crate::database::json::JsonStore;
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use crate::middlewares::jwt::JWTMiddleware;
use actix_web::web::{delete, get, post, put, resource, scope, Data, Json, JsonConfig, ServiceConfig};
use actix_web::HttpResponse;

pub async fn register<D>(docs: Data<D>, tokener: Data<JWT>, ttl: Data<TokenTtl>, Json(body): Json<Register>) -> Result<HttpResponse, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    let session = user::register(&mut store, tokener.get_ref(), ttl.0, body).await?;
    Ok(HttpResponse::Created().json(session))
}

pub async fn login<D>(docs: Data<D>, tokener: Data<JWT>, ttl: Data<TokenTtl>, Json(body): Json<Login>) -> Result<Json<Session>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(user::login(&mut store, tokener.get_ref(), ttl.0, body).await?))
}

pub async fn me<D>(principal: UserInfo, docs: Data<D>) -> Result<Json<Profile>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(user::me(&mut store, &principal).await?))
}

/// Mounts the `/api` tree. The document backend itself is registered by the
/// caller as `Data<D>`.
pub fn configure<D>(cfg: &mut ServiceConfig, tokener: JWT, ttl: TokenTtl)
where
    D: DocumentStore + Clone + 'static,
{
    cfg.app_data(Data::new(tokener.clone()))
        .app_data(Data::new(ttl))
        .app_data(JsonConfig::default().error_handler(|err, _| Error::InvalidInput(err.to_string()).into()))
        .service(
            scope("/api")
                .service(
                    scope("/auth")
                        .service(resource("/register").route(post().to(register::<D>)))
                        .service(resource("/login").route(post().to(login::<D>)))
                        .service(resource("/me").wrap(JWTMiddleware::new(tokener.clone())).route(get().to(me::<D>))),
                )
                .service(resource("/active-survey").route(get().to(survey::active::<D>)))
                .service(
                    scope("/responses")
                        .service(resource("").route(post().to(response::submit::<D>)))
                        .service(resource("/{id}").wrap(JWTMiddleware::new(tokener.clone())).route(get().to(response::detail::<D>))),
                )
                .service(
                    scope("/surveys")
                        .wrap(JWTMiddleware::new(tokener))
                        .service(resource("").route(get().to(survey::list::<D>)).route(post().to(survey::create::<D>)))
                        .service(
                            resource("/{id}")
                                .route(get().to(survey::detail::<D>))
                                .route(put().to(survey::update::<D>))
                                .route(delete().to(survey::delete::<D>)),
                        )
                        .service(resource("/{id}/responses").route(get().to(survey::responses::<D>)))
                        .service(resource("/{id}/analytics").route(get().to(survey::analytics::<D>))),
                ),
        );
}
