use crate::context::UserInfo;
use crate::core::analytics::survey_analytics;
use crate::core::models::analytics::SurveyAnalytics;
use crate::core::models::response::Query as ResponseQuery;
use crate::core::policy::{authorize, Operation};
use crate::core::ports::repository::{ResponseCommon, Store, SurveyCommon};
use crate::error::Error;

pub async fn analytics_of_survey<S>(store: &mut S, user: &UserInfo, survey_id: &str) -> Result<SurveyAnalytics, Error>
where
    S: Store,
{
    authorize(Operation::ReadAnalytics, Some(user))?;
    let survey = SurveyCommon::get(store, survey_id).await?;
    let responses = ResponseCommon::query(
        store,
        ResponseQuery {
            survey_id_eq: Some(survey.id.clone()),
        },
    )
    .await?;
    Ok(survey_analytics(&survey, &responses))
}
