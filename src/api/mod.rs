//! Food Service Bindings
//!
//! Interface to the remote REST service that persists foods.
//! The dashboard only talks to `dyn FoodApi`, injected through context.

mod http;
#[cfg(test)]
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Food, FoodInput};

pub use http::HttpFoodApi;
#[cfg(test)]
pub use memory::InMemoryFoodApi;

/// Result type for service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// A request to the food service failed
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or body decoding failure
    #[error("request failed: {0}")]
    Request(String),

    /// Service answered with a non-success status
    #[error("service responded with status {0}")]
    Status(u16),

    /// No food with this id
    #[error("food {0} not found")]
    NotFound(u32),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None => ApiError::Request(err.to_string()),
        }
    }
}

/// CRUD operations offered by the food service
///
/// The handle is shared through context so it must be `Send + Sync`;
/// the returned futures are not (browser fetch futures never are).
#[async_trait(?Send)]
pub trait FoodApi: Send + Sync {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// `POST /foods`, returns the stored food with its assigned id
    async fn create_food(&self, input: &FoodInput, available: bool) -> ApiResult<Food>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, food: &Food) -> ApiResult<()>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
