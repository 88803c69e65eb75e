pub mod error_banner;
pub mod inputs;
pub mod main_layout;
pub mod nav_bar;
pub mod password_strength_meter;
pub mod protected_route;
pub mod spinner;
pub mod template_card;
pub mod vendor_card;

pub use error_banner::{ErrorBanner, FieldError};
pub use main_layout::MainLayout;
pub use nav_bar::NavBar;
pub use password_strength_meter::PasswordStrengthMeter;
pub use protected_route::{evaluate_guard, GuardOutcome, ProtectedRoute};
pub use spinner::Spinner;
pub use template_card::TemplateCard;
pub use vendor_card::VendorCard;
