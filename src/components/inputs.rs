// Lectura de valores de los eventos de formulario

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn checkbox_checked(e: &Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}

/// Primer fichero seleccionado en un `<input type="file">`
pub fn selected_file(e: &Event) -> Option<web_sys::File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}

/// Callback de `oninput` que copia el valor del input en un campo del estado
pub fn bind_input<T: Clone + 'static>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        apply(&mut next, input_value(&e));
        state.set(next);
    })
}

pub fn bind_textarea<T: Clone + 'static>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        apply(&mut next, textarea_value(&e));
        state.set(next);
    })
}

pub fn bind_checkbox<T: Clone + 'static>(state: &UseStateHandle<T>, apply: fn(&mut T, bool)) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let mut next = (*state).clone();
        apply(&mut next, checkbox_checked(&e));
        state.set(next);
    })
}
