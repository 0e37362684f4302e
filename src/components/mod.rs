pub mod dreamhost_link;
pub mod footer;
pub mod header;
pub mod pages;
pub mod ui;
