//! Dashboard Handlers
//!
//! Run an action against the injected service and settle its result in the
//! store. The dashboard spawns these with `spawn_local`.

use leptos::prelude::*;

use crate::actions;
use crate::api::ApiResult;
use crate::context::DashboardContext;
use crate::models::{Food, FoodInput};
use crate::store::{store_apply_change, DashboardStateStoreFields, DashboardStore, FoodChange};

/// Apply the change of a successful call; a failed call only logs
pub fn settle(store: &DashboardStore, what: &str, result: ApiResult<FoodChange>) {
    match result {
        Ok(change) => store_apply_change(store, change),
        Err(err) => log::error!("[Dashboard] Failed to {}: {}", what, err),
    }
}

pub async fn load(store: DashboardStore, ctx: DashboardContext) {
    let result = actions::load_foods(ctx.api.as_ref(), &ctx.currency).await;
    if let Ok(FoodChange::Loaded(foods)) = &result {
        log::info!("[Dashboard] Loaded {} foods", foods.len());
    }
    settle(&store, "load foods", result);
}

pub async fn add(store: DashboardStore, ctx: DashboardContext, input: FoodInput) {
    let result = actions::add_food(ctx.api.as_ref(), &ctx.currency, &input).await;
    settle(&store, "add food", result);
}

/// Save the form over the editing target; without a target nothing is sent
pub async fn update(store: DashboardStore, ctx: DashboardContext, input: FoodInput) {
    let Some(editing) = store.editing_food().get_untracked() else {
        log::warn!("[Dashboard] Update submitted without an editing target");
        return;
    };
    let result = actions::update_food(ctx.api.as_ref(), &ctx.currency, &editing, &input).await;
    settle(&store, "update food", result);
}

pub async fn delete(store: DashboardStore, ctx: DashboardContext, id: u32) {
    let result = actions::delete_food(ctx.api.as_ref(), id).await;
    settle(&store, "delete food", result);
}

pub async fn change_availability(store: DashboardStore, ctx: DashboardContext, food: Food, available: bool) {
    let result = actions::set_availability(ctx.api.as_ref(), &ctx.currency, &food, available).await;
    settle(&store, "change availability", result);
}
