pub mod api;
pub mod charts;
pub mod data;
pub mod models;
