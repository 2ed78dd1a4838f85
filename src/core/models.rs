pub mod analytics;
pub mod answer;
pub mod document;
pub mod question;
pub mod response;
pub mod survey;
pub mod user;
