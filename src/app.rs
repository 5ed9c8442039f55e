//! Menu Dashboard App
//!
//! Builds the collaborators from configuration and provides them via context.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{FoodApi, HttpFoodApi};
use crate::components::Dashboard;
use crate::config::AppConfig;
use crate::context::DashboardContext;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] Food service at {}", config.api.base_url);

    let api: Arc<dyn FoodApi> = Arc::new(HttpFoodApi::new(config.api.clone()));

    // Provide collaborators and state to all children
    provide_context(DashboardContext::new(api, config.currency));
    provide_context(Store::new(DashboardState::default()));

    view! {
        <main class="dashboard">
            <Dashboard />
        </main>
    }
}
