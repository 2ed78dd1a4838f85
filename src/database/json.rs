use crate::core::models::{
    document::Document,
    response::{Insert as ResponseInsert, Query as ResponseQuery, Response},
    survey::{Insert as SurveyInsert, Patch as SurveyPatch, Survey},
    user::{normalize_email, Insert as UserInsert, User},
};
use crate::core::ports::document::DocumentStore;
use crate::core::ports::repository::{Common, ResponseCommon, Store, SurveyCommon, UserCommon};
use crate::error::Error;
use chrono::Utc;
use uuid::Uuid;

/// Repository adapter over a whole-document backend. Every call is a full
/// load, an in-memory change and, for writes, a full save.
pub struct JsonStore<D> {
    documents: D,
}

impl<D> JsonStore<D>
where
    D: DocumentStore,
{
    pub fn new(documents: D) -> Self {
        Self { documents }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn survey_index(doc: &Document, id: &str) -> Result<usize, Error> {
    doc.surveys.iter().position(|s| s.id == id).ok_or(Error::NotFound("survey"))
}

impl<D> SurveyCommon for JsonStore<D>
where
    D: DocumentStore,
{
    async fn insert(&mut self, data: SurveyInsert) -> Result<Survey, Error> {
        let survey = Survey {
            id: new_id(),
            title: data.title,
            description: data.description,
            active: data.active,
            questions: data.questions,
            created_at: Utc::now(),
        };
        self.documents
            .modify(move |doc| {
                doc.surveys.push(survey.clone());
                Ok(survey)
            })
            .await
    }

    async fn query(&mut self) -> Result<Vec<Survey>, Error> {
        Ok(self.documents.load().await?.surveys)
    }

    async fn get(&mut self, id: &str) -> Result<Survey, Error> {
        let mut doc = self.documents.load().await?;
        let idx = survey_index(&doc, id)?;
        Ok(doc.surveys.swap_remove(idx))
    }

    async fn update(&mut self, id: &str, patch: SurveyPatch) -> Result<Survey, Error> {
        self.documents
            .modify(|doc| {
                let idx = survey_index(doc, id)?;
                let survey = &mut doc.surveys[idx];
                survey.apply(patch)?;
                Ok(survey.clone())
            })
            .await
    }

    async fn delete(&mut self, id: &str) -> Result<(), Error> {
        self.documents
            .modify(|doc| {
                let idx = survey_index(doc, id)?;
                doc.surveys.remove(idx);
                Ok(())
            })
            .await
    }

    async fn first_active(&mut self) -> Result<Survey, Error> {
        self.documents
            .load()
            .await?
            .surveys
            .into_iter()
            .find(|s| s.active)
            .ok_or(Error::NotFound("active survey"))
    }
}

impl<D> ResponseCommon for JsonStore<D>
where
    D: DocumentStore,
{
    async fn insert(&mut self, data: ResponseInsert) -> Result<Response, Error> {
        self.documents
            .modify(move |doc| {
                let idx = survey_index(doc, &data.survey_id)?;
                data.check_against(&doc.surveys[idx])?;
                let response = Response {
                    id: new_id(),
                    survey_id: data.survey_id,
                    customer_id: data.customer_id,
                    answers: data.answers,
                    submitted_at: Utc::now(),
                };
                doc.responses.push(response.clone());
                Ok(response)
            })
            .await
    }

    async fn query(&mut self, query: ResponseQuery) -> Result<Vec<Response>, Error> {
        let doc = self.documents.load().await?;
        Ok(doc.responses.into_iter().filter(|r| query.matches(r)).collect())
    }

    async fn get(&mut self, id: &str) -> Result<Response, Error> {
        self.documents
            .load()
            .await?
            .responses
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(Error::NotFound("response"))
    }
}

impl<D> UserCommon for JsonStore<D>
where
    D: DocumentStore,
{
    async fn insert(&mut self, data: UserInsert) -> Result<User, Error> {
        let user = User {
            id: new_id(),
            email: normalize_email(&data.email),
            password: data.password,
            salt: data.salt,
            name: data.name,
            role: data.role,
            created_at: Utc::now(),
        };
        self.documents
            .modify(move |doc| {
                if doc.users.iter().any(|u| normalize_email(&u.email) == user.email) {
                    return Err(Error::Conflict("user with this email already exists".into()));
                }
                doc.users.push(user.clone());
                Ok(user)
            })
            .await
    }

    async fn get(&mut self, id: &str) -> Result<User, Error> {
        self.documents
            .load()
            .await?
            .users
            .into_iter()
            .find(|u| u.id == id)
            .ok_or(Error::NotFound("user"))
    }

    async fn get_by_email(&mut self, email: &str) -> Result<Option<User>, Error> {
        let email = normalize_email(email);
        Ok(self.documents.load().await?.users.into_iter().find(|u| normalize_email(&u.email) == email))
    }
}

impl<D> Common for JsonStore<D> where D: DocumentStore {}

impl<D> Store for JsonStore<D> where D: DocumentStore {}
