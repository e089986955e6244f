//! Request and response DTOs for the JSON API.

pub mod request;
pub mod response;
