pub mod api;
pub mod routes;
pub mod ui;
