pub mod app_context;
pub mod use_page_data;

pub use app_context::{use_app_context, AppContext, AppContextProvider};
pub use use_page_data::{use_page_data, UsePageDataHandle};
