use crate::core::models::answer::Answer;
use crate::core::models::survey::Survey;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub survey_id: String,
    pub customer_id: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub submitted_at: DateTime<Utc>,
}

impl Response {
    pub fn answer_for(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit {
    pub survey_id: String,
    pub customer_id: String,
    pub answers: Vec<Answer>,
}

impl Submit {
    /// Boundary checks that need no stored state.
    pub fn validate(self) -> Result<Insert, Error> {
        if self.survey_id.trim().is_empty() {
            return Err(Error::InvalidInput("surveyId is required".into()));
        }
        if self.customer_id.trim().is_empty() {
            return Err(Error::InvalidInput("customerId is required".into()));
        }
        Ok(Insert {
            survey_id: self.survey_id,
            customer_id: self.customer_id,
            answers: self.answers,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub survey_id: String,
    pub customer_id: String,
    pub answers: Vec<Answer>,
}

impl Insert {
    /// Every answer must name a question of `survey` and match its shape.
    /// Option values are not checked against the declared options.
    pub fn check_against(&self, survey: &Survey) -> Result<(), Error> {
        for answer in &self.answers {
            let question = survey
                .question(&answer.question_id)
                .ok_or_else(|| Error::InvalidInput(format!("survey {} has no question {}", survey.id, answer.question_id)))?;
            answer.check(question)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub survey_id_eq: Option<String>,
}

impl Query {
    pub fn matches(&self, response: &Response) -> bool {
        self.survey_id_eq.as_ref().map_or(true, |id| &response.survey_id == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::question::{Opt, Question, QuestionType};
    use serde_json::json;

    fn survey() -> Survey {
        Survey {
            id: "s1".into(),
            title: "Cart".into(),
            description: String::new(),
            active: true,
            questions: vec![
                Question {
                    id: "q1".into(),
                    text: "Recommend us?".into(),
                    type_: QuestionType::Radio,
                    required: true,
                    options: Some(vec![Opt {
                        value: "yes".into(),
                        label: "Yes".into(),
                    }]),
                },
                Question {
                    id: "q2".into(),
                    text: "Why?".into(),
                    type_: QuestionType::Text,
                    required: false,
                    options: None,
                },
            ],
            created_at: Utc::now(),
        }
    }

    fn insert(answers: Vec<Answer>) -> Insert {
        Insert {
            survey_id: "s1".into(),
            customer_id: "cust42".into(),
            answers,
        }
    }

    #[test]
    fn test_unknown_question_rejected() {
        let res = insert(vec![Answer::single("q9", "x")]).check_against(&survey());
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_foreign_option_value_accepted() {
        let res = insert(vec![Answer::single("q1", "maybe"), Answer::single("q2", "cheap")]).check_against(&survey());
        assert!(res.is_ok());
    }

    #[test]
    fn test_submit_requires_customer() {
        let submit: Submit = serde_json::from_value(json!({ "surveyId": "s1", "customerId": "", "answers": [] })).unwrap();
        assert!(matches!(submit.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_query_matches() {
        let resp = Response {
            id: "r1".into(),
            survey_id: "s1".into(),
            customer_id: "c".into(),
            answers: vec![],
            submitted_at: Utc::now(),
        };
        assert!(Query::default().matches(&resp));
        assert!(Query { survey_id_eq: Some("s1".into()) }.matches(&resp));
        assert!(!Query { survey_id_eq: Some("s2".into()) }.matches(&resp));
    }
}
