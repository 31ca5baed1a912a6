//! UPI intent and QR image URL construction

use urlencoding::encode;

use crate::config::UpiConfig;

const QR_SIZE: &str = "280x280";

/// Builds payment intents for one receiving account
#[derive(Debug, Clone)]
pub struct UpiPayee {
    vpa: String,
    name: String,
    qr_service_url: String,
}

impl UpiPayee {
    pub fn new(config: &UpiConfig) -> Self {
        Self {
            vpa: config.payee_vpa.clone(),
            name: config.payee_name.clone(),
            qr_service_url: config.qr_service_url.clone(),
        }
    }

    /// `upi://pay` intent. `amount` is in major units with two decimals.
    pub fn intent(&self, amount: &str, booking_id: i32, transaction_id: &str) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}&tr={}",
            encode(&self.vpa),
            encode(&self.name),
            encode(amount),
            encode(&format!("Booking {booking_id}")),
            encode(transaction_id),
        )
    }

    /// Image URL that renders `intent` as a QR code.
    pub fn qr_image_url(&self, intent: &str) -> String {
        let separator = if self.qr_service_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{separator}size={QR_SIZE}&data={}",
            self.qr_service_url,
            encode(intent)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payee() -> UpiPayee {
        UpiPayee::new(&UpiConfig {
            payee_vpa: "yourvpa@bank".into(),
            payee_name: "LuxuryStay".into(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".into(),
        })
    }

    #[test]
    fn test_intent() {
        let intent = payee().intent("5.00", 42, "txn_00112233aabbccdd");
        assert_eq!(
            intent,
            "upi://pay?pa=yourvpa%40bank&pn=LuxuryStay&am=5.00&cu=INR&tn=Booking%2042&tr=txn_00112233aabbccdd"
        );
    }

    #[test]
    fn test_intent_encodes_payee_name() {
        let mut p = payee();
        p.name = "Sea & Sand".into();
        assert!(p.intent("1.00", 1, "txn_x").contains("pn=Sea%20%26%20Sand&"));
    }

    #[test]
    fn test_qr_image_url() {
        let p = payee();
        let url = p.qr_image_url("upi://pay?pa=a&am=1.00");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=280x280&data=upi%3A%2F%2Fpay%3Fpa%3Da%26am%3D1.00"
        );

        let mut p = payee();
        p.qr_service_url = "https://qr.example/render?format=png".into();
        assert!(p.qr_image_url("x").starts_with("https://qr.example/render?format=png&size="));
    }
}
