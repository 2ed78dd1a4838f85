pub mod documents;
pub mod tokener;
