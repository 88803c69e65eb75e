// ============================================================================
// PROTECTED ROUTE - guard por rol
// ============================================================================
// Se evalúa en cada render (cada navegación). No escucha cambios de
// localStorage: un token invalidado en otra pestaña se detecta en la
// siguiente navegación o en el siguiente 401.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_app_context;
use crate::models::Role;
use crate::routes::Route;
use crate::stores::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectToLogin,
    /// Sesión válida pero de otro rol: a la ruta neutra `/`
    RedirectToHome,
}

pub fn evaluate_guard(session: &SessionStore, required: Role) -> GuardOutcome {
    if !session.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    match session.role() {
        Some(role) if role == required => GuardOutcome::Render,
        _ => GuardOutcome::RedirectToHome,
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub role: Role,
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let context = use_app_context();

    match evaluate_guard(&context.session, props.role) {
        GuardOutcome::Render => html! { <>{props.children.clone()}</> },
        GuardOutcome::RedirectToLogin => {
            log::info!("🔒 Sin sesión, redirigiendo a /login");
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        GuardOutcome::RedirectToHome => {
            log::warn!("⛔ Ruta de {} con otra sesión", props.role);
            html! { <Redirect<Route> to={Route::Root} /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::models::{LoginResponse, User};
    use crate::utils::MemoryStorage;

    fn session_with(role: Option<Role>) -> SessionStore {
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        if let Some(role) = role {
            session
                .save(&LoginResponse {
                    access_token: "t".into(),
                    token_type: "bearer".into(),
                    user: User {
                        user_id: 1,
                        email: "a@b.com".into(),
                        role,
                    },
                })
                .unwrap();
        }
        session
    }

    #[test]
    fn no_token_goes_to_login() {
        let session = session_with(None);
        assert_eq!(evaluate_guard(&session, Role::Customer), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn wrong_role_goes_home() {
        let session = session_with(Some(Role::Vendor));
        assert_eq!(evaluate_guard(&session, Role::Customer), GuardOutcome::RedirectToHome);
        assert_eq!(evaluate_guard(&session, Role::Vendor), GuardOutcome::Render);
    }

    #[test]
    fn cleared_session_is_rejected_on_next_check() {
        let session = session_with(Some(Role::Customer));
        assert_eq!(evaluate_guard(&session, Role::Customer), GuardOutcome::Render);
        session.clear();
        assert_eq!(evaluate_guard(&session, Role::Customer), GuardOutcome::RedirectToLogin);
    }
}
