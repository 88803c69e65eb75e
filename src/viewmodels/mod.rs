pub mod analytics;
pub mod credit;
pub mod reservations;
pub mod signup;
pub mod template_editor;
pub mod templates;
pub mod vendor_browse;

pub use analytics::{forecast_bars, ForecastBar};
pub use credit::{CreditErrors, CreditField, CreditForm};
pub use reservations::{partition_for_customer, partition_for_vendor, with_status, ReservationPartition};
pub use signup::{CustomerSignupForm, SignupErrors, SignupField, VendorSignupForm, VendorStep};
pub use template_editor::{allergen_id, TemplateErrors, TemplateField, TemplateForm};
pub use templates::{composition, dietary_badge, partition_templates, TemplatePartition};
pub use vendor_browse::{browse_vendors, VendorFilter, VendorSort};
