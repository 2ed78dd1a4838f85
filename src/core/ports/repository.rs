use crate::core::models::{
    response::{Insert as ResponseInsert, Query as ResponseQuery, Response},
    survey::{Insert as SurveyInsert, Patch as SurveyPatch, Survey},
    user::{Insert as UserInsert, User},
};
use crate::error::Error;

pub trait SurveyCommon {
    async fn insert(&mut self, data: SurveyInsert) -> Result<Survey, Error>;
    async fn query(&mut self) -> Result<Vec<Survey>, Error>;
    async fn get(&mut self, id: &str) -> Result<Survey, Error>;
    async fn update(&mut self, id: &str, patch: SurveyPatch) -> Result<Survey, Error>;
    async fn delete(&mut self, id: &str) -> Result<(), Error>;
    async fn first_active(&mut self) -> Result<Survey, Error>;
}

pub trait ResponseCommon {
    async fn insert(&mut self, data: ResponseInsert) -> Result<Response, Error>;
    async fn query(&mut self, query: ResponseQuery) -> Result<Vec<Response>, Error>;
    async fn get(&mut self, id: &str) -> Result<Response, Error>;
}

pub trait UserCommon {
    async fn insert(&mut self, data: UserInsert) -> Result<User, Error>;
    async fn get(&mut self, id: &str) -> Result<User, Error>;
    async fn get_by_email(&mut self, email: &str) -> Result<Option<User>, Error>;
}

pub trait Common: SurveyCommon + ResponseCommon + UserCommon {}

pub trait Store: Common {}
