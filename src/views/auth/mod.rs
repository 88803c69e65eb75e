pub mod customer_signup;
pub mod login;
pub mod vendor_signup;

pub use customer_signup::CustomerSignUpPage;
pub use login::LoginPage;
pub use vendor_signup::VendorSignUpPage;
