use crate::context::UserInfo;
use crate::core::models::survey::{Create as SurveyCreate, Patch as SurveyPatch, Survey};
use crate::core::policy::{authorize, Operation};
use crate::core::ports::repository::{Store, SurveyCommon};
use crate::error::Error;

pub async fn list_surveys<S>(store: &mut S, user: &UserInfo) -> Result<Vec<Survey>, Error>
where
    S: Store,
{
    authorize(Operation::ListSurveys, Some(user))?;
    SurveyCommon::query(store).await
}

pub async fn survey_detail<S>(store: &mut S, user: &UserInfo, id: &str) -> Result<Survey, Error>
where
    S: Store,
{
    authorize(Operation::ReadSurvey, Some(user))?;
    SurveyCommon::get(store, id).await
}

pub async fn create_survey<S>(store: &mut S, user: &UserInfo, survey: SurveyCreate) -> Result<Survey, Error>
where
    S: Store,
{
    authorize(Operation::CreateSurvey, Some(user))?;
    let survey = SurveyCommon::insert(store, survey.validate()?).await?;
    log::info!("user {} created survey {}", user.id, survey.id);
    Ok(survey)
}

pub async fn update_survey<S>(store: &mut S, user: &UserInfo, id: &str, patch: SurveyPatch) -> Result<Survey, Error>
where
    S: Store,
{
    authorize(Operation::UpdateSurvey, Some(user))?;
    let survey = SurveyCommon::update(store, id, patch).await?;
    log::info!("user {} updated survey {}", user.id, survey.id);
    Ok(survey)
}

/// Removes the survey only. Its responses stay in the document and remain
/// listable under the old survey id.
pub async fn delete_survey<S>(store: &mut S, user: &UserInfo, id: &str) -> Result<(), Error>
where
    S: Store,
{
    authorize(Operation::DeleteSurvey, Some(user))?;
    SurveyCommon::delete(store, id).await?;
    log::info!("user {} deleted survey {}", user.id, id);
    Ok(())
}

/// The first survey marked active, in collection order.
pub async fn active_survey<S>(store: &mut S) -> Result<Survey, Error>
where
    S: Store,
{
    authorize(Operation::ActiveSurvey, None)?;
    SurveyCommon::first_active(store).await
}
