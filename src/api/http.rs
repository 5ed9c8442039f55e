//! HTTP implementation of [`FoodApi`] on top of reqwest.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use super::{ApiError, ApiResult, FoodApi};
use crate::config::ApiConfig;
use crate::models::{Food, FoodInput, NewFood};

/// Talks to the food service over HTTP (fetch when compiled to wasm32)
#[derive(Clone)]
pub struct HttpFoodApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpFoodApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn food_url(&self, id: u32) -> String {
        self.config.url(&format!("/foods/{}", id))
    }
}

/// 404 on an addressed food means it is gone, anything else non-2xx is a status error
fn expect_found(response: Response, id: u32) -> ApiResult<Response> {
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(id));
    }
    Ok(response.error_for_status()?)
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let foods = self
            .client
            .get(self.config.url("/foods"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Food>>()
            .await?;
        Ok(foods)
    }

    async fn create_food(&self, input: &FoodInput, available: bool) -> ApiResult<Food> {
        let food = self
            .client
            .post(self.config.url("/foods"))
            .json(&NewFood { input, available })
            .send()
            .await?
            .error_for_status()?
            .json::<Food>()
            .await?;
        Ok(food)
    }

    async fn update_food(&self, food: &Food) -> ApiResult<()> {
        let response = self.client.put(self.food_url(food.id)).json(food).send().await?;
        expect_found(response, food.id)?;
        Ok(())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let response = self.client.delete(self.food_url(id)).send().await?;
        expect_found(response, id)?;
        Ok(())
    }
}
