pub mod analytics;
pub mod auth;
pub mod models;
pub mod policy;
pub mod ports;
pub mod services;
pub mod tokener;
