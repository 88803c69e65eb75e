use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{AppContext, AppContextProvider};
use crate::routes::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    // Un único cliente/sesión para toda la vida de la app
    let context = use_memo((), |_| AppContext::browser(&CONFIG));

    html! {
        <AppContextProvider context={(*context).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AppContextProvider>
    }
}
