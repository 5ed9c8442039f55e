//! Dashboard Actions
//!
//! Each handler calls the food service and, only when the call succeeds,
//! returns the [`FoodChange`] to apply locally. Failures leave the list alone.

use crate::api::{ApiResult, FoodApi};
use crate::format::CurrencyFormat;
use crate::models::{Food, FoodInput};
use crate::store::FoodChange;

/// Fetch the full list and format every price
pub async fn load_foods(api: &dyn FoodApi, currency: &CurrencyFormat) -> ApiResult<FoodChange> {
    let foods = api
        .list_foods()
        .await?
        .into_iter()
        .map(|food| food.with_formatted_price(currency))
        .collect();
    Ok(FoodChange::Loaded(foods))
}

/// Create a food; new foods are always available
pub async fn add_food(
    api: &dyn FoodApi,
    currency: &CurrencyFormat,
    input: &FoodInput,
) -> ApiResult<FoodChange> {
    let created = api.create_food(input, true).await?;
    Ok(FoodChange::Added(created.with_formatted_price(currency)))
}

/// Save the form over the editing target. Availability is left untouched.
pub async fn update_food(
    api: &dyn FoodApi,
    currency: &CurrencyFormat,
    editing: &Food,
    input: &FoodInput,
) -> ApiResult<FoodChange> {
    let edited = editing.merged_with(input);
    api.update_food(&edited).await?;
    Ok(FoodChange::Updated(edited.with_formatted_price(currency)))
}

pub async fn delete_food(api: &dyn FoodApi, id: u32) -> ApiResult<FoodChange> {
    api.delete_food(id).await?;
    Ok(FoodChange::Removed(id))
}

/// Mark a food (un)available, keeping every other field
pub async fn set_availability(
    api: &dyn FoodApi,
    currency: &CurrencyFormat,
    food: &Food,
    available: bool,
) -> ApiResult<FoodChange> {
    let changed = Food { available, ..food.clone() };
    api.update_food(&changed).await?;
    Ok(FoodChange::Updated(changed.with_formatted_price(currency)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, InMemoryFoodApi};

    fn input(name: &str, price: &str) -> FoodInput {
        FoodInput {
            name: name.to_string(),
            image_url: format!("{}.png", name.to_lowercase()),
            price: price.to_string(),
            description: format!("{} description", name),
        }
    }

    fn stored(id: u32, name: &str, price: &str, available: bool) -> Food {
        Food {
            id,
            name: name.to_string(),
            image_url: format!("{}.png", name.to_lowercase()),
            price: price.to_string(),
            price_formatted: String::new(),
            description: String::new(),
            available,
        }
    }

    #[tokio::test]
    async fn test_load_formats_prices() {
        let api = InMemoryFoodApi::with_foods(vec![stored(1, "X", "10", true), stored(2, "Z", "1234.5", false)]);

        let change = load_foods(&api, &CurrencyFormat::PT_BR).await.expect("load failed");

        let FoodChange::Loaded(foods) = change else {
            panic!("expected Loaded, got {:?}", change);
        };
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].price_formatted, "R$\u{a0}10,00");
        assert_eq!(foods[1].price_formatted, "R$\u{a0}1.234,50");
    }

    #[tokio::test]
    async fn test_add_marks_available_and_uses_server_id() {
        let api = InMemoryFoodApi::with_foods(vec![stored(4, "X", "10", true)]);

        let change = add_food(&api, &CurrencyFormat::PT_BR, &input("Y", "5")).await.unwrap();

        let FoodChange::Added(food) = change else {
            panic!("expected Added, got {:?}", change);
        };
        assert_eq!(food.id, 5);
        assert!(food.available);
        assert_eq!(food.price_formatted, "R$\u{a0}5,00");
        assert_eq!(api.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_availability() {
        let original = stored(1, "X", "10", false);
        let api = InMemoryFoodApi::with_foods(vec![original.clone()]);

        let change = update_food(&api, &CurrencyFormat::PT_BR, &original, &input("X2", "12.5"))
            .await
            .unwrap();

        let FoodChange::Updated(food) = change else {
            panic!("expected Updated, got {:?}", change);
        };
        assert_eq!(food.id, 1);
        assert!(!food.available);
        assert_eq!(food.name, "X2");
        assert_eq!(food.price_formatted, "R$\u{a0}12,50");
        assert_eq!(api.stored()[0].name, "X2");
    }

    #[tokio::test]
    async fn test_delete_returns_removed_id() {
        let api = InMemoryFoodApi::with_foods(vec![stored(1, "X", "10", true)]);

        let change = delete_food(&api, 1).await.unwrap();

        assert_eq!(change, FoodChange::Removed(1));
        assert!(api.stored().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let api = InMemoryFoodApi::default();
        let err = delete_food(&api, 3).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_set_availability_flips_only_the_flag() {
        let original = stored(2, "Y", "5", true);
        let api = InMemoryFoodApi::with_foods(vec![original.clone()]);

        let change = set_availability(&api, &CurrencyFormat::PT_BR, &original, false).await.unwrap();

        let FoodChange::Updated(food) = change else {
            panic!("expected Updated, got {:?}", change);
        };
        assert!(!food.available);
        assert_eq!(food.name, original.name);
        assert_eq!(food.price, original.price);
        assert!(!api.stored()[0].available);
    }

    #[tokio::test]
    async fn test_failures_produce_no_change() {
        let original = stored(1, "X", "10", true);
        let api = InMemoryFoodApi::with_foods(vec![original.clone()]);
        api.set_failing(true);
        let brl = CurrencyFormat::PT_BR;

        assert!(matches!(load_foods(&api, &brl).await, Err(ApiError::Status(500))));
        assert!(add_food(&api, &brl, &input("Y", "5")).await.is_err());
        assert!(update_food(&api, &brl, &original, &input("X2", "1")).await.is_err());
        assert!(delete_food(&api, 1).await.is_err());
        assert!(set_availability(&api, &brl, &original, false).await.is_err());

        assert_eq!(api.stored(), vec![original]);
    }
}
