pub mod page_store;
pub mod session_store;

pub use page_store::LoadState;
pub use session_store::{Session, SessionStore};
