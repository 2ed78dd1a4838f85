use crate::error::Error;
use serde::{de::DeserializeOwned, Serialize};

/// Claims carried inside an access token.
pub trait Payload: Serialize + DeserializeOwned {
    /// Id of the principal the token was issued to.
    fn subject(&self) -> &str;
}

/// Signs and verifies access tokens. Verification failures surface as
/// `Error::InvalidToken`.
pub trait Tokener<P: Payload> {
    fn gen_token(&self, payload: &P) -> Result<String, Error>;
    fn verify_token(&self, token: &str) -> Result<P, Error>;
}
