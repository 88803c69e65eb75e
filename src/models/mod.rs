pub mod auth;
pub mod customer;
pub mod forecast;
pub mod reservation;
pub mod template;
pub mod vendor;

pub use auth::{
    LoginRequest, LoginResponse, MessageResponse, RegisterCustomerRequest, RegisterVendorRequest,
    Role, User, UserSignup, CustomerSignup, VendorSignup,
};
pub use customer::{CreditTopUpRequest, Customer, Streak};
pub use forecast::{Forecast, ForecastDataPoint, ForecastWeek};
pub use reservation::{
    CreateBundleRequest, PickupCheckRequest, Reservation, ReservationList, ReservationStatus,
    ReserveResponse,
};
pub use template::{
    Allergen, AvailableCount, Template, TemplateCreate, TemplateCreated, TemplateList,
    TemplateWithCount,
};
pub use vendor::Vendor;
