//! Application Context
//!
//! Collaborators provided to components via the Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::FoodApi;
use crate::format::CurrencyFormat;

/// Injected food service and currency layout
#[derive(Clone)]
pub struct DashboardContext {
    pub api: Arc<dyn FoodApi>,
    pub currency: CurrencyFormat,
}

impl DashboardContext {
    pub fn new(api: Arc<dyn FoodApi>, currency: CurrencyFormat) -> Self {
        Self { api, currency }
    }
}

/// Get the dashboard context
pub fn use_dashboard_context() -> DashboardContext {
    expect_context::<DashboardContext>()
}
