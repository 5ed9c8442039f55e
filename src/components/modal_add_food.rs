//! Add Food Modal

use leptos::prelude::*;

use crate::components::{FoodForm, Modal};
use crate::models::FoodInput;

#[component]
pub fn ModalAddFood(
    is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] handle_add_food: Callback<FoodInput>,
) -> impl IntoView {
    let on_submit = move |input: FoodInput| {
        handle_add_food.run(input);
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <h1 class="modal-title">"Novo Prato"</h1>
            <FoodForm
                initial=Signal::stored(FoodInput::default())
                submit_label="Adicionar Prato"
                reset_on_submit=true
                on_submit=on_submit
            />
        </Modal>
    }
}
