//! Application state for stay-server

use sqlx::PgPool;

use crate::BoxError;
use crate::config::Config;
use crate::razorpay::RazorpayClient;
use crate::services::{BookingService, IntakeService, PaymentService};
use crate::upi::UpiPayee;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bookings: BookingService,
    pub payments: PaymentService,
    pub intake: IntakeService,
}

impl AppState {
    /// Connect the database (creating and migrating it if needed) and build services
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = crate::db::connect(config).await?;
        Self::with_pool(pool, config)
    }

    /// Build services on an existing pool
    pub fn with_pool(pool: PgPool, config: &Config) -> Result<Self, BoxError> {
        let razorpay = RazorpayClient::new(&config.razorpay.api_base, config.razorpay.timeout)?;

        Ok(Self {
            bookings: BookingService::new(pool.clone()),
            payments: PaymentService::new(
                pool.clone(),
                razorpay,
                &config.razorpay,
                UpiPayee::new(&config.upi),
                config.amount_convention,
            ),
            intake: IntakeService::new(pool),
        })
    }
}
