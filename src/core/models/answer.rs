use crate::core::models::question::{Question, QuestionType};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// One answer inside a response. Radio and text questions carry `value`,
/// checkbox questions carry `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Answer {
    pub fn single(question_id: &str, value: &str) -> Self {
        Self {
            question_id: question_id.into(),
            value: Some(value.into()),
            values: None,
        }
    }

    pub fn multi(question_id: &str, values: &[&str]) -> Self {
        Self {
            question_id: question_id.into(),
            value: None,
            values: Some(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    /// The option keys this answer selects for a question of type `type_`.
    /// Checkbox answers stored before shape checks existed may carry a lone
    /// `value`; it counts as a single selection.
    pub fn selections(&self, type_: QuestionType) -> Vec<&str> {
        match type_ {
            QuestionType::Checkbox => match (&self.values, &self.value) {
                (Some(values), _) => values.iter().map(String::as_str).collect(),
                (None, Some(value)) => vec![value.as_str()],
                (None, None) => Vec::new(),
            },
            QuestionType::Radio | QuestionType::Text => self.value.iter().map(String::as_str).collect(),
        }
    }

    /// Checks the answer shape against the question it claims to answer.
    pub fn check(&self, question: &Question) -> Result<(), Error> {
        let ok = match question.type_ {
            QuestionType::Checkbox => self.value.is_none() && self.values.is_some(),
            QuestionType::Radio | QuestionType::Text => self.value.is_some() && self.values.is_none(),
        };
        if !ok {
            let expected = if question.type_ == QuestionType::Checkbox { "values" } else { "value" };
            return Err(Error::InvalidInput(format!("answer to question {} must carry only `{}`", question.id, expected)));
        }
        if self.values.as_ref().is_some_and(Vec::is_empty) {
            return Err(Error::InvalidInput(format!("answer to question {} must select at least one value", question.id)));
        }
        Ok(())
    }
}
