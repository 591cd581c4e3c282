pub mod accounts;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod listings;
pub mod map;
pub mod messages;
pub mod models;
pub mod nav;
pub mod wizard;
