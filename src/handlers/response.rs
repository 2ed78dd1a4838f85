use crate::context::UserInfo;
use crate::core::models::response::{Response, Submit};
use crate::core::ports::document::DocumentStore;
use crate::core::services::response;
use crate::database::json::JsonStore;
use crate::error::Error;
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;

pub async fn submit<D>(docs: Data<D>, Json(body): Json<Submit>) -> Result<HttpResponse, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    let submitted = response::submit_response(&mut store, body).await?;
    Ok(HttpResponse::Created().json(submitted))
}

pub async fn detail<D>(user: UserInfo, docs: Data<D>, id: Path<String>) -> Result<Json<Response>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(response::response_detail(&mut store, &user, &id).await?))
}
