use crate::error::Error;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Radio,
    Checkbox,
    Text,
}

impl QuestionType {
    /// Radio and checkbox questions are answered by picking declared options.
    pub fn has_options(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opt {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub type_: QuestionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Opt>>,
}

impl Question {
    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().flatten().map(|o| o.value.as_str())
    }

    /// Checks one question in isolation. Text questions drop whatever options
    /// the builder left behind when the type was switched.
    fn normalize(&mut self) -> Result<(), Error> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidInput("question id is required".into()));
        }
        if !self.type_.has_options() {
            self.options = None;
            return Ok(());
        }
        match &self.options {
            Some(opts) if !opts.is_empty() => Ok(()),
            _ => Err(Error::InvalidInput(format!("question {} requires at least one option", self.id))),
        }
    }
}

/// Validates an ordered question list: every question well formed and ids
/// unique within the list.
pub fn normalize_questions(questions: &mut [Question]) -> Result<(), Error> {
    for q in questions.iter_mut() {
        q.normalize()?;
    }
    if let Some(dup) = questions.iter().map(|q| q.id.as_str()).duplicates().next() {
        return Err(Error::InvalidInput(format!("duplicate question id {}", dup)));
    }
    Ok(())
}
