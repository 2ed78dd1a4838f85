use crate::core::models::question::QuestionType;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-option tallies in declared order. Keys outside the declared options are
/// appended in the order they are first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCounts(Vec<(String, u64)>);

impl OptionCounts {
    pub fn declared<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for v in values {
            if counts.get(v).is_none() {
                counts.0.push((v.to_owned(), 0));
            }
        }
        counts
    }

    pub fn increment(&mut self, key: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => self.0.push((key.to_owned(), 1)),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for OptionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, n) in &self.0 {
            map.serialize_entry(k, n)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tally {
    OptionCounts(OptionCounts),
    Responses(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub question_id: String,
    pub question_text: String,
    #[serde(rename = "type")]
    pub type_: QuestionType,
    pub total_responses: u64,
    #[serde(flatten)]
    pub tally: Tally,
}

impl QuestionSummary {
    pub fn option_counts(&self) -> Option<&OptionCounts> {
        match &self.tally {
            Tally::OptionCounts(counts) => Some(counts),
            Tally::Responses(_) => None,
        }
    }

    pub fn text_responses(&self) -> Option<&[String]> {
        match &self.tally {
            Tally::Responses(texts) => Some(texts),
            Tally::OptionCounts(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnalytics {
    pub survey_id: String,
    pub survey_title: String,
    pub total_responses: u64,
    pub analytics: Vec<QuestionSummary>,
}
