pub mod fmt;
pub mod group;
pub mod models;
pub mod upload;
