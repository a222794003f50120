//! API handlers for the TechLibrary REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
