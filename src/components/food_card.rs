//! Food Card Component
//!
//! One dish in the list with edit, delete and availability controls.
//! Everything the card shows comes from the listed `Food`, so the card only
//! changes once a service call succeeded and the list was reconciled.

use leptos::prelude::*;

use crate::models::Food;

fn card_class(available: bool) -> &'static str {
    if available { "food-card" } else { "food-card unavailable" }
}

fn availability_label(available: bool) -> &'static str {
    if available { "Disponível" } else { "Indisponível" }
}

/// Availability the switch asks for when clicked
fn requested_availability(food: &Food) -> (Food, bool) {
    (food.clone(), !food.available)
}

/// A single food card
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] handle_delete: Callback<u32>,
    #[prop(into)] handle_edit_food: Callback<Food>,
    /// Receives the food and its requested availability
    #[prop(into)] handle_toggle_available: Callback<(Food, bool)>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let edit_target = food.clone();
    let toggle_target = food.clone();

    view! {
        <div class=card_class(available)>
            <header class="food-card-image">
                <img src=food.image_url.clone() alt=food.name.clone() />
            </header>
            <section class="food-card-body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">{food.price_formatted.clone()}</p>
            </section>
            <section class="food-card-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit-btn"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| handle_edit_food.run(edit_target.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon delete-btn"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| handle_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{availability_label(available)}</p>
                    <label class="switch" for=format!("available-switch-{}", id)>
                        // Controlled: the browser must not flip the box, a re-render does
                        <input
                            id=format!("available-switch-{}", id)
                            type="checkbox"
                            prop:checked=available
                            data-testid=format!("change-status-food-{}", id)
                            on:click=move |ev| {
                                ev.prevent_default();
                                handle_toggle_available.run(requested_availability(&toggle_target));
                            }
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
