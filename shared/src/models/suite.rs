//! Suite catalog
//!
//! The catalog is static marketing content; prices are nightly rates in
//! major units.

use serde::Serialize;

/// One bookable suite type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suite {
    pub title: &'static str,
    pub desc: &'static str,
    pub price: u32,
    pub currency: &'static str,
    pub image: &'static str,
    pub slug: &'static str,
}

const CITY_VIEW_IMAGE: &str =
    "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?q=80&w=1600";
const WORKSPACE_IMAGE: &str =
    "https://images.unsplash.com/photo-1528909514045-2fa4ac7a08ba?q=80&w=1600";

pub const SUITES: [Suite; 5] = [
    Suite {
        title: "Signature Suite",
        desc: "Experience expansive city views, bespoke furnishings, and a marble ensuite bath. Enjoy complimentary breakfast and lounge access.",
        price: 9999,
        currency: "INR",
        image: CITY_VIEW_IMAGE,
        slug: "signature-suite",
    },
    Suite {
        title: "Presidential Suite",
        desc: "A palatial residence with private lounge, butler service, and panoramic skyline views.",
        price: 19999,
        currency: "INR",
        image: CITY_VIEW_IMAGE,
        slug: "presidential-suite",
    },
    Suite {
        title: "Executive Room",
        desc: "Smart, elegant space for business travelers with ergonomic workspace and fast Wi\u{2011}Fi.",
        price: 6499,
        currency: "INR",
        image: WORKSPACE_IMAGE,
        slug: "executive-room",
    },
    Suite {
        title: "Deluxe King Room",
        desc: "A spacious retreat featuring a plush king bed, warm tones, and city vistas.",
        price: 7999,
        currency: "INR",
        image: CITY_VIEW_IMAGE,
        slug: "deluxe-king-room",
    },
    Suite {
        title: "Family Suite",
        desc: "Designed for families with a separate living area, twin options, and kid\u{2011}friendly amenities.",
        price: 8999,
        currency: "INR",
        image: WORKSPACE_IMAGE,
        slug: "family-suite",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique() {
        let slugs: HashSet<_> = SUITES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), SUITES.len());
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(SUITES[1]).unwrap();
        assert_eq!(json["slug"], "presidential-suite");
        assert_eq!(json["price"], 19999);
    }
}
