//! Business services
//!
//! Each service owns what it needs (pool, gateway client, settings) and is
//! cheap to clone into handler state.

pub mod booking;
pub mod concierge;
pub mod intake;
pub mod payment;

pub use booking::BookingService;
pub use intake::IntakeService;
pub use payment::PaymentService;
