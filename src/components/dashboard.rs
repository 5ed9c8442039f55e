//! Dashboard Page
//!
//! Lists the menu and wires the header, modals and cards to the handlers.
//! Every service call runs in `spawn_local`; its change reaches the store
//! only when the call succeeded.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_dashboard_context;
use crate::handlers;
use crate::models::{Food, FoodInput};
use crate::store::{
    store_begin_edit, store_toggle_add_modal, store_toggle_edit_modal, use_dashboard_store,
    DashboardStateStoreFields,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_dashboard_store();
    let ctx = use_dashboard_context();

    // Load foods once on mount
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            spawn_local(handlers::load(store, ctx.clone()));
        });
    }

    let handle_add_food = {
        let ctx = ctx.clone();
        Callback::new(move |input: FoodInput| spawn_local(handlers::add(store, ctx.clone(), input)))
    };

    let handle_update_food = {
        let ctx = ctx.clone();
        Callback::new(move |input: FoodInput| spawn_local(handlers::update(store, ctx.clone(), input)))
    };

    let handle_delete_food = {
        let ctx = ctx.clone();
        Callback::new(move |id: u32| spawn_local(handlers::delete(store, ctx.clone(), id)))
    };

    let handle_toggle_available = Callback::new(move |(food, available): (Food, bool)| {
        spawn_local(handlers::change_availability(store, ctx.clone(), food, available))
    });

    let handle_edit_food = Callback::new(move |food: Food| store_begin_edit(&store, food));

    view! {
        <Header on_open_modal=move |_| store_toggle_add_modal(&store) />
        <ModalAddFood
            is_open=Signal::derive(move || store.modals().get().add_open)
            set_is_open=move |_| store_toggle_add_modal(&store)
            handle_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=Signal::derive(move || store.modals().get().edit_open)
            set_is_open=move |_| store_toggle_edit_modal(&store)
            editing_food=Signal::derive(move || store.editing_food().get())
            handle_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                // Every displayed field is part of the key so edits re-render the card
                key=|food| {
                    (
                        food.id,
                        food.name.clone(),
                        food.image_url.clone(),
                        food.price_formatted.clone(),
                        food.description.clone(),
                        food.available,
                    )
                }
                children=move |food| {
                    view! {
                        <FoodCard
                            food=food
                            handle_delete=handle_delete_food
                            handle_edit_food=handle_edit_food
                            handle_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}
