use crate::context::UserInfo;
use crate::core::models::user::Role;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Register,
    Login,
    Me,
    ListSurveys,
    ReadSurvey,
    CreateSurvey,
    UpdateSurvey,
    DeleteSurvey,
    ActiveSurvey,
    SubmitResponse,
    ListResponses,
    ReadResponse,
    ReadAnalytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
    Role(Role),
}

impl Operation {
    pub fn requirement(self) -> Requirement {
        match self {
            Operation::Register | Operation::Login | Operation::ActiveSurvey | Operation::SubmitResponse => Requirement::Public,
            Operation::DeleteSurvey => Requirement::Role(Role::Admin),
            Operation::Me
            | Operation::ListSurveys
            | Operation::ReadSurvey
            | Operation::CreateSurvey
            | Operation::UpdateSurvey
            | Operation::ListResponses
            | Operation::ReadResponse
            | Operation::ReadAnalytics => Requirement::Authenticated,
        }
    }
}

/// Decides whether `principal` may perform `operation`. Callers run it before
/// touching stored state.
pub fn authorize(operation: Operation, principal: Option<&UserInfo>) -> Result<(), Error> {
    match (operation.requirement(), principal) {
        (Requirement::Public, _) => Ok(()),
        (_, None) => Err(Error::Unauthenticated),
        (Requirement::Authenticated, Some(_)) => Ok(()),
        (Requirement::Role(role), Some(p)) if p.role == role => Ok(()),
        (Requirement::Role(_), Some(p)) => {
            log::warn!("user {} denied {:?}", p.id, operation);
            Err(Error::Forbidden)
        }
    }
}
