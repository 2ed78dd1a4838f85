use crate::core::models::{response::Response, survey::Survey, user::User};
use serde::{Deserialize, Serialize};

/// The whole persisted state. It is always loaded and saved as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub surveys: Vec<Survey>,
    #[serde(default)]
    pub responses: Vec<Response>,
}
