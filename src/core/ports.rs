pub mod document;
pub mod repository;
