//! Data transfer objects for the JSON API.

pub mod response;
