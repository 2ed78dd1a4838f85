use crate::context::UserInfo;
use crate::core::models::response::{Query as ResponseQuery, Response, Submit};
use crate::core::policy::{authorize, Operation};
use crate::core::ports::repository::{ResponseCommon, Store};
use crate::error::Error;

pub async fn submit_response<S>(store: &mut S, submit: Submit) -> Result<Response, Error>
where
    S: Store,
{
    authorize(Operation::SubmitResponse, None)?;
    let response = ResponseCommon::insert(store, submit.validate()?).await?;
    log::info!("customer {} answered survey {}", response.customer_id, response.survey_id);
    Ok(response)
}

pub async fn responses_of_survey<S>(store: &mut S, user: &UserInfo, survey_id: &str) -> Result<Vec<Response>, Error>
where
    S: Store,
{
    authorize(Operation::ListResponses, Some(user))?;
    ResponseCommon::query(
        store,
        ResponseQuery {
            survey_id_eq: Some(survey_id.to_owned()),
        },
    )
    .await
}

pub async fn response_detail<S>(store: &mut S, user: &UserInfo, id: &str) -> Result<Response, Error>
where
    S: Store,
{
    authorize(Operation::ReadResponse, Some(user))?;
    ResponseCommon::get(store, id).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::answer::Answer;
    use crate::core::models::survey::Create as SurveyCreate;
    use crate::core::models::user::Role;
    use crate::core::services::survey::create_survey;
    use crate::database::json::JsonStore;
    use crate::impls::documents::memory::MemoryDocument;
    use serde_json::json;

    fn staff() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "staff@example.com".into(),
            role: Role::User,
        }
    }

    fn submit(survey_id: &str, answers: Vec<Answer>) -> Submit {
        Submit {
            survey_id: survey_id.into(),
            customer_id: "cust1234".into(),
            answers,
        }
    }

    async fn seeded(store: &mut JsonStore<MemoryDocument>) -> String {
        let create: SurveyCreate = serde_json::from_value(json!({
            "title": "Cart",
            "active": true,
            "questions": [
                { "id": "q1", "text": "Gift wrap?", "type": "checkbox", "options": [{ "value": "box", "label": "Box" }, { "value": "card", "label": "Card" }] },
                { "id": "q2", "text": "Notes", "type": "text" },
            ],
        }))
        .unwrap();
        create_survey(store, &staff(), create).await.unwrap().id
    }

    #[tokio::test]
    async fn test_submit_and_list() {
        let mut store = JsonStore::new(MemoryDocument::default());
        let survey_id = seeded(&mut store).await;
        let resp = submit_response(&mut store, submit(&survey_id, vec![Answer::multi("q1", &["box", "card"]), Answer::single("q2", "thanks")]))
            .await
            .unwrap();
        assert_eq!(resp.survey_id, survey_id);
        assert_eq!(resp.customer_id, "cust1234");
        let listed = responses_of_survey(&mut store, &staff(), &survey_id).await.unwrap();
        assert_eq!(listed, vec![resp.clone()]);
        assert_eq!(response_detail(&mut store, &staff(), &resp.id).await.unwrap(), resp);
        assert!(matches!(response_detail(&mut store, &staff(), "nope").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submit_to_unknown_survey() {
        let mut store = JsonStore::new(MemoryDocument::default());
        let res = submit_response(&mut store, submit("ghost", vec![])).await;
        assert!(matches!(res, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_submit_rejects_mismatched_shape() {
        let mut store = JsonStore::new(MemoryDocument::default());
        let survey_id = seeded(&mut store).await;
        let res = submit_response(&mut store, submit(&survey_id, vec![Answer::single("q1", "box")])).await;
        assert!(matches!(res, Err(Error::InvalidInput(_))));
        assert!(responses_of_survey(&mut store, &staff(), &survey_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_checkbox() {
        let mut store = JsonStore::new(MemoryDocument::default());
        let survey_id = seeded(&mut store).await;
        let res = submit_response(&mut store, submit(&survey_id, vec![Answer::multi("q1", &[])])).await;
        assert!(matches!(res, Err(Error::InvalidInput(_))));
        assert!(responses_of_survey(&mut store, &staff(), &survey_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_survey_lists_nothing() {
        let mut store = JsonStore::new(MemoryDocument::default());
        assert!(responses_of_survey(&mut store, &staff(), "ghost").await.unwrap().is_empty());
    }
}
