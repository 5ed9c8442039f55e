//! Edit Food Modal
//!
//! Prefilled from the editing target; submitting saves over it.

use leptos::prelude::*;

use crate::components::{FoodForm, Modal};
use crate::models::{Food, FoodInput};

#[component]
pub fn ModalEditFood(
    is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    editing_food: Signal<Option<Food>>,
    #[prop(into)] handle_update_food: Callback<FoodInput>,
) -> impl IntoView {
    let initial = Signal::derive(move || {
        editing_food.with(|food| food.as_ref().map(Food::to_input).unwrap_or_default())
    });

    let on_submit = move |input: FoodInput| {
        handle_update_food.run(input);
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <h1 class="modal-title">"Editar Prato"</h1>
            <FoodForm initial=initial submit_label="Editar Prato" on_submit=on_submit />
        </Modal>
    }
}
