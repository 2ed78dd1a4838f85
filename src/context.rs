use crate::core::models::user::{Claim, Role};
use crate::error::Error;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

/// The authenticated principal, placed in request extensions by the JWT
/// middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl From<Claim> for UserInfo {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            email: claim.email,
            role: claim.role,
        }
    }
}

impl FromRequest for UserInfo {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<Self>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(Error::Unauthenticated)),
        }
    }
}
