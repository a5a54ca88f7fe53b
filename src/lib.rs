pub mod api;
pub mod application;
pub mod auth;
pub mod desktop;
pub mod dto;
pub mod error;
pub mod grades;
pub mod realtime;
pub mod service;

pub use error::Error;
