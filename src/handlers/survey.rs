use crate::context::UserInfo;
use crate::core::models::analytics::SurveyAnalytics;
use crate::core::models::response::Response;
use crate::core::models::survey::{Create as SurveyCreate, Patch as SurveyPatch, Survey};
use crate::core::ports::document::DocumentStore;
use crate::core::services::{analytics, response, survey};
use crate::database::json::JsonStore;
use crate::error::Error;
use crate::response::Message;
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;

pub async fn list<D>(user: UserInfo, docs: Data<D>) -> Result<Json<Vec<Survey>>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(survey::list_surveys(&mut store, &user).await?))
}

pub async fn create<D>(user: UserInfo, docs: Data<D>, Json(body): Json<SurveyCreate>) -> Result<HttpResponse, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    let created = survey::create_survey(&mut store, &user, body).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn detail<D>(user: UserInfo, docs: Data<D>, id: Path<String>) -> Result<Json<Survey>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(survey::survey_detail(&mut store, &user, &id).await?))
}

pub async fn update<D>(user: UserInfo, docs: Data<D>, id: Path<String>, Json(body): Json<SurveyPatch>) -> Result<Json<Survey>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(survey::update_survey(&mut store, &user, &id, body).await?))
}

pub async fn delete<D>(user: UserInfo, docs: Data<D>, id: Path<String>) -> Result<Json<Message>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    survey::delete_survey(&mut store, &user, &id).await?;
    Ok(Json(Message::new("Survey deleted successfully")))
}

pub async fn responses<D>(user: UserInfo, docs: Data<D>, id: Path<String>) -> Result<Json<Vec<Response>>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(response::responses_of_survey(&mut store, &user, &id).await?))
}

pub async fn analytics<D>(user: UserInfo, docs: Data<D>, id: Path<String>) -> Result<Json<SurveyAnalytics>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(analytics::analytics_of_survey(&mut store, &user, &id).await?))
}

pub async fn active<D>(docs: Data<D>) -> Result<Json<Survey>, Error>
where
    D: DocumentStore + Clone + 'static,
{
    let mut store = JsonStore::new(docs.get_ref().clone());
    Ok(Json(survey::active_survey(&mut store).await?))
}
