use crate::core::models::question::{normalize_questions, Question};
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

impl Survey {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Merges the supplied fields onto this survey. `id` and `created_at`
    /// never change. The merged survey is validated before it is returned.
    pub fn apply(&mut self, patch: Patch) -> Result<(), Error> {
        let Patch {
            title,
            description,
            active,
            questions,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(active) = active {
            self.active = active;
        }
        if let Some(questions) = questions {
            self.questions = questions;
        }
        check_title(&self.title)?;
        normalize_questions(&mut self.questions)
    }
}

fn check_title(title: &str) -> Result<(), Error> {
    if title.trim().is_empty() {
        return Err(Error::InvalidInput("title is required".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Create {
    pub fn validate(mut self) -> Result<Insert, Error> {
        check_title(&self.title)?;
        normalize_questions(&mut self.questions)?;
        Ok(Insert {
            title: self.title,
            description: self.description,
            active: self.active,
            questions: self.questions,
        })
    }
}

/// A validated survey ready to be stored.
#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub description: String,
    pub active: bool,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub questions: Option<Vec<Question>>,
}
