/// Navegación "dura" (recarga completa), usada al expirar la sesión.
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ Sin window, no se puede redirigir a {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("❌ Error redirigiendo a {}: {:?}", path, e);
        }
    }
}
