//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The reconciliation rules live in plain functions over `Vec<Food>` so they
//! can be tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Food;

/// Visibility of the two modals. The flags never affect each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub add_open: bool,
    pub edit_open: bool,
}

impl ModalState {
    pub fn toggle_add(&mut self) {
        self.add_open = !self.add_open;
    }

    pub fn toggle_edit(&mut self) {
        self.edit_open = !self.edit_open;
    }
}

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods in display order
    pub foods: Vec<Food>,
    /// Food loaded into the edit form
    pub editing_food: Option<Food>,
    pub modals: ModalState,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// What a successful service call changed
#[derive(Clone, Debug, PartialEq)]
pub enum FoodChange {
    /// Initial load, replaces the whole list
    Loaded(Vec<Food>),
    /// Created on the server, goes to the end
    Added(Food),
    /// Replaces the entry with the same id, in place
    Updated(Food),
    /// Deleted on the server
    Removed(u32),
}

/// Apply a change to the list, keeping ids unique and order stable
pub fn apply_change(foods: &mut Vec<Food>, change: FoodChange) {
    match change {
        FoodChange::Loaded(loaded) => *foods = loaded,
        FoodChange::Added(food) => {
            if let Some(existing) = foods.iter_mut().find(|f| f.id == food.id) {
                log::warn!("[Store] Food {} already listed, replacing instead of appending", food.id);
                *existing = food;
            } else {
                foods.push(food);
            }
        }
        FoodChange::Updated(food) => match foods.iter_mut().find(|f| f.id == food.id) {
            Some(existing) => *existing = food,
            None => log::warn!("[Store] Updated food {} is not listed", food.id),
        },
        FoodChange::Removed(id) => {
            if let Some(index) = foods.iter().position(|f| f.id == id) {
                foods.remove(index);
            }
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Apply a change to the food list in the store
pub fn store_apply_change(store: &DashboardStore, change: FoodChange) {
    apply_change(&mut store.foods().write(), change);
}

/// Load a food into the edit form and toggle the edit modal
pub fn store_begin_edit(store: &DashboardStore, food: Food) {
    store.editing_food().set(Some(food));
    store.modals().update(ModalState::toggle_edit);
}

pub fn store_toggle_add_modal(store: &DashboardStore) {
    store.modals().update(ModalState::toggle_add);
}

pub fn store_toggle_edit_modal(store: &DashboardStore) {
    store.modals().update(ModalState::toggle_edit);
}
