// Utils compartidos

pub mod cancellation;
pub mod card;
pub mod constants;
pub mod format;
pub mod password;
pub mod storage;
pub mod validation;

pub use cancellation::CancelToken;
pub use card::{luhn_valid, CardNetwork};
pub use constants::*;
pub use format::{format_gbp, format_percent, format_probability, resolve_image_url};
pub use password::PasswordStrength;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
