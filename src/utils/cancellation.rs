use std::cell::Cell;
use std::rc::Rc;

/// Token de cancelación ligado al ciclo de vida de un componente.
/// Se crea al montar la página y se cancela en el cleanup del efecto;
/// las respuestas que llegan después se descartan.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
