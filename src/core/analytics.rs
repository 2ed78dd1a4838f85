use crate::core::models::analytics::{OptionCounts, QuestionSummary, SurveyAnalytics, Tally};
use crate::core::models::question::{Question, QuestionType};
use crate::core::models::response::Response;
use crate::core::models::survey::Survey;

/// Folds `responses` into one summary per question of `survey`, in question
/// order. The caller passes only the responses that belong to `survey`.
pub fn aggregate(survey: &Survey, responses: &[Response]) -> Vec<QuestionSummary> {
    survey.questions.iter().map(|q| summarize_question(q, responses)).collect()
}

pub fn survey_analytics(survey: &Survey, responses: &[Response]) -> SurveyAnalytics {
    SurveyAnalytics {
        survey_id: survey.id.clone(),
        survey_title: survey.title.clone(),
        total_responses: responses.len() as u64,
        analytics: aggregate(survey, responses),
    }
}

fn summarize_question(question: &Question, responses: &[Response]) -> QuestionSummary {
    let mut answers: Vec<_> = responses.iter().filter_map(|r| r.answer_for(&question.id)).collect();
    if question.type_.has_options() {
        answers.retain(|a| !a.selections(question.type_).is_empty());
    }
    let tally = match question.type_ {
        QuestionType::Radio | QuestionType::Checkbox => {
            let mut counts = OptionCounts::declared(question.option_values());
            for answer in &answers {
                for key in answer.selections(question.type_) {
                    counts.increment(key);
                }
            }
            Tally::OptionCounts(counts)
        }
        QuestionType::Text => Tally::Responses(answers.iter().filter_map(|a| a.value.clone()).collect()),
    };
    QuestionSummary {
        question_id: question.id.clone(),
        question_text: question.text.clone(),
        type_: question.type_,
        total_responses: answers.len() as u64,
        tally,
    }
}
