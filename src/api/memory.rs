//! In-memory [`FoodApi`] used by the tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, ApiResult, FoodApi};
use crate::models::{Food, FoodInput};

/// Stores foods in a Vec and assigns ids like the real service
#[derive(Default)]
pub struct InMemoryFoodApi {
    foods: Mutex<Vec<Food>>,
    failing: AtomicBool,
}

impl InMemoryFoodApi {
    pub fn with_foods(foods: Vec<Food>) -> Self {
        Self {
            foods: Mutex::new(foods),
            failing: AtomicBool::new(false),
        }
    }

    /// While set, every call answers with a 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of what the "server" holds
    pub fn stored(&self) -> Vec<Food> {
        self.foods.lock().unwrap().clone()
    }

    fn check(&self) -> ApiResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Status(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl FoodApi for InMemoryFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        self.check()?;
        Ok(self.stored())
    }

    async fn create_food(&self, input: &FoodInput, available: bool) -> ApiResult<Food> {
        self.check()?;
        let mut foods = self.foods.lock().unwrap();
        let id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let food = Food {
            id,
            name: input.name.clone(),
            image_url: input.image_url.clone(),
            price: input.price.clone(),
            price_formatted: String::new(),
            description: input.description.clone(),
            available,
        };
        foods.push(food.clone());
        Ok(food)
    }

    async fn update_food(&self, food: &Food) -> ApiResult<()> {
        self.check()?;
        let mut foods = self.foods.lock().unwrap();
        let slot = foods
            .iter_mut()
            .find(|f| f.id == food.id)
            .ok_or(ApiError::NotFound(food.id))?;
        *slot = Food { price_formatted: String::new(), ..food.clone() };
        Ok(())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        self.check()?;
        let mut foods = self.foods.lock().unwrap();
        let before = foods.len();
        foods.retain(|f| f.id != id);
        if foods.len() == before {
            return Err(ApiError::NotFound(id));
        }
        Ok(())
    }
}
