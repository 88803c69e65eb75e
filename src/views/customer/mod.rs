pub mod bundle_view;
pub mod credit;
pub mod home;
pub mod reservations;
pub mod vendor_view;

pub use bundle_view::BundleDetailsPage;
pub use credit::CustomerCreditPage;
pub use home::CustomerHomePage;
pub use reservations::CustomerReservationsPage;
pub use vendor_view::CustomerVendorPage;
