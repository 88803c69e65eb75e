use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Error de carga o de acción mostrado dentro de la página
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error-banner" role="alert">
            <span class="error-icon">{"⚠️"}</span>
            <span class="error-text">{props.message.clone()}</span>
            if let Some(on_retry) = &props.on_retry {
                <button type="button" class="btn-retry" onclick={on_retry.reform(|_| ())}>
                    {"Retry"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Mensaje bajo un campo; los saltos de línea se pintan como líneas separadas
#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="field-error">
                { for message.lines().map(|line| html! { <p>{line.to_string()}</p> }) }
            </div>
        },
        None => html! {},
    }
}
