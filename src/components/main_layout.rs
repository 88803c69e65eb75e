use yew::prelude::*;

use crate::components::nav_bar::NavBar;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Barra de navegación fija + contenido de la página
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <NavBar />
            <main class="app-content">
                {props.children.clone()}
            </main>
        </div>
    }
}
