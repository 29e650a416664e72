// Presentation layer - HTTP server and the served page
pub mod app_state;
pub mod handlers;
pub mod page;
