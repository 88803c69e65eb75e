use yew::prelude::*;

use crate::utils::PasswordStrength;

#[derive(Properties, PartialEq)]
pub struct PasswordStrengthMeterProps {
    pub password: AttrValue,
}

/// Pista visual, no bloquea el envío
#[function_component(PasswordStrengthMeter)]
pub fn password_strength_meter(props: &PasswordStrengthMeterProps) -> Html {
    if props.password.is_empty() {
        return html! {};
    }

    let strength = PasswordStrength::classify(&props.password);
    let level = strength.level();

    html! {
        <div class={classes!("strength-meter", strength.as_str())}>
            <div class="strength-bars">
                { for (1..=5).map(|i| html! {
                    <span class={classes!("strength-bar", (i <= level).then_some("filled"))}></span>
                }) }
            </div>
            <span class="strength-label">{strength.label()}</span>
        </div>
    }
}
