pub mod api;
pub mod app;
pub mod pages;
pub mod utils;
