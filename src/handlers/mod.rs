pub mod auth;
pub mod categories;
pub mod items;
pub mod pages;
