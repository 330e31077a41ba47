//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{AdvertiserProfile, Campaign, Goal, Rate, User};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // User Fixtures
    // =========================================================================

    /// Create an active user with an email and nothing else.
    pub fn user(id: u64, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            status: "active".to_string(),
            ..Default::default()
        }
    }

    /// Create a verified promoter with a balance and payout address.
    pub fn promoter(id: u64, email: &str, first_name: &str, last_name: &str) -> User {
        User {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_verified: true,
            balance: 25_000,
            earned: 125_000,
            payout_address: format!("{first_name}@moneybutton.com").to_lowercase(),
            ..Self::user(id, email)
        }
    }

    // =========================================================================
    // Campaign Fixtures
    // =========================================================================

    /// Create a funded campaign without goals.
    pub fn campaign(id: u64, advertiser_profile_id: u64, title: &str) -> Campaign {
        Campaign {
            id,
            advertiser_profile_id,
            title: title.to_string(),
            currency: "usd".to_string(),
            balance: 10.0,
            balance_satoshis: 5_000_000,
            pay_per_click_rate: 0.01,
            target_url: "https://tonicpow.com".to_string(),
            ..Default::default()
        }
    }

    /// Create a campaign with an embedded advertiser profile.
    pub fn campaign_with_advertiser(
        id: u64,
        title: &str,
        advertiser: AdvertiserProfile,
    ) -> Campaign {
        Campaign {
            advertiser_profile: Some(advertiser.clone()),
            ..Self::campaign(id, advertiser.id, title)
        }
    }

    /// Create an advertiser profile.
    pub fn advertiser(id: u64, user_id: u64, name: &str) -> AdvertiserProfile {
        AdvertiserProfile {
            id,
            user_id,
            name: name.to_string(),
            homepage_url: "https://tonicpow.com".to_string(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Goal Fixtures
    // =========================================================================

    /// Create a flat-payout goal for a campaign.
    pub fn goal(id: u64, campaign_id: u64, name: &str) -> Goal {
        Goal {
            id,
            campaign_id,
            name: name.to_string(),
            title: name.to_string(),
            payout_rate: 0.05,
            payout_type: "flat".to_string(),
            max_per_promoter: 1,
            ..Default::default()
        }
    }

    // =========================================================================
    // Rate Fixtures
    // =========================================================================

    /// Create a BSV rate for a currency.
    pub fn rate(currency: &str, currency_name: &str, price: f64) -> Rate {
        Rate {
            currency: currency.to_lowercase(),
            currency_name: currency_name.to_string(),
            price,
            rate_last_updated: "2024-01-01T00:00:00Z".to_string(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Create a complete test scenario with related data.
    ///
    /// - Users #1 (promoter) and #2 (advertiser)
    /// - Campaign #10 owned by advertiser profile #3 with goals #11 and #12
    /// - Campaign #20 without goals
    /// - Rates for usd and eur
    pub fn default_scenario() -> DefaultScenario {
        let advertiser = Self::advertiser(3, 2, "Acme Ads");

        DefaultScenario {
            users: vec![
                Self::promoter(1, "promoter@tonicpow.com", "Satchmo", "Bitcoin"),
                Self::user(2, "advertiser@tonicpow.com"),
            ],
            campaigns: vec![
                Self::campaign_with_advertiser(10, "Launch Campaign", advertiser),
                Self::campaign(20, 3, "Evergreen Campaign"),
            ],
            goals: vec![
                Self::goal(11, 10, "signup"),
                Self::goal(12, 10, "purchase"),
            ],
            rates: vec![
                Self::rate("usd", "United States Dollar", 50.0),
                Self::rate("eur", "Euro", 45.0),
            ],
        }
    }
}

/// A complete test scenario with related data.
#[derive(Debug, Clone)]
pub struct DefaultScenario {
    pub users: Vec<User>,
    pub campaigns: Vec<Campaign>,
    pub goals: Vec<Goal>,
    pub rates: Vec<Rate>,
}
