//! Request and Response models for the cache server API

pub mod requests;
pub mod responses;

pub use requests::{validate_key, SetRequest};
pub use responses::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetResponse, StatsResponse,
};
