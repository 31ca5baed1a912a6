//! stay-server - hotel booking backend
//!
//! - Takes contact inquiries and lead-guest registrations
//! - Creates bookings and confirms their payment
//! - Issues payment orders (UPI QR locally, cards through Razorpay)
//! - Serves the suite catalog and a scripted concierge chat

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod razorpay;
pub mod services;
pub mod state;
pub mod upi;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
