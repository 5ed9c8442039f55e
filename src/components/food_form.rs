//! Food Form Component
//!
//! Collects the dish fields for both modals.

use leptos::prelude::*;

use crate::models::FoodInput;

/// Form for the editable food fields
///
/// # Arguments
/// * `initial` - Values the fields are (re)filled with whenever it changes
/// * `reset_on_submit` - Clear back to `initial` after submitting (add modal)
/// * `on_submit` - Receives the collected fields
#[component]
pub fn FoodForm(
    initial: Signal<FoodInput>,
    #[prop(into)] submit_label: String,
    #[prop(optional)] reset_on_submit: bool,
    #[prop(into)] on_submit: Callback<FoodInput>,
) -> impl IntoView {
    let (form, set_form) = signal(FoodInput::default());

    // Refill when the editing target changes
    Effect::new(move |_| {
        set_form.set(initial.get());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get_untracked());
        if reset_on_submit {
            set_form.set(initial.get_untracked());
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <label class="food-form-field">
                "URL da imagem"
                <input
                    type="text"
                    name="image"
                    placeholder="Cole o link aqui"
                    prop:value=move || form.read().image_url.clone()
                    on:input=move |ev| set_form.update(|f| f.image_url = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                "Nome do prato"
                <input
                    type="text"
                    name="name"
                    placeholder="Ex: Moda Italiana"
                    prop:value=move || form.read().name.clone()
                    on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                "Preço"
                <input
                    type="text"
                    name="price"
                    placeholder="Ex: 19.90"
                    prop:value=move || form.read().price.clone()
                    on:input=move |ev| set_form.update(|f| f.price = event_target_value(&ev))
                />
            </label>
            <label class="food-form-field">
                "Descrição do prato"
                <input
                    type="text"
                    name="description"
                    placeholder="Descrição"
                    prop:value=move || form.read().description.clone()
                    on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="food-form-submit">{submit_label}</button>
        </form>
    }
}
