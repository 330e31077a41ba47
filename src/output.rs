//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{
    AdvertiserProfile, Campaign, Conversion, Goal, Link, Rate, User, VisitorSession,
};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(title: String) -> Vec<String> {
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{:<16}{}", format!("{label}:"), value));
    }
}

impl PrettyPrint for User {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("User #{}", self.id));
        push_field(&mut lines, "Email", &self.email);
        push_field(&mut lines, "Name", &self.full_name());
        push_field(&mut lines, "Status", &self.status);
        lines.push(format!("{:<16}{} sats", "Balance:", self.balance));
        lines.push(format!("{:<16}{} sats", "Earned:", self.earned));
        push_field(&mut lines, "Payout", &self.payout_address);
        if self.email_verified {
            lines.push("Verified:       email".to_string());
        }
        lines.join("\n")
    }
}

impl PrettyPrint for AdvertiserProfile {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Advertiser #{}", self.id));
        push_field(&mut lines, "Name", &self.name);
        push_field(&mut lines, "Homepage", &self.homepage_url);
        lines.push(format!("{:<16}{}", "User:", self.user_id));
        lines.join("\n")
    }
}

impl PrettyPrint for Campaign {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Campaign #{}", self.id));
        push_field(&mut lines, "Title", &self.title);
        push_field(&mut lines, "Target", &self.target_url);
        lines.push(format!(
            "{:<16}{} sats ({} {})",
            "Balance:", self.balance_satoshis, self.balance, self.currency
        ));
        lines.push(format!("{:<16}{}", "Per Click:", self.pay_per_click_rate));
        lines.push(format!(
            "{:<16}{} clicks, {} links",
            "Activity:", self.clicks, self.links_created
        ));

        match self.expiry() {
            Some(at) => lines.push(format!(
                "{:<16}{}",
                "Expires:",
                at.format("%Y-%m-%d %H:%M:%S UTC")
            )),
            None => push_field(&mut lines, "Expires", &self.expires_at),
        }

        if !self.goals.is_empty() {
            let names: Vec<&str> = self.goals.iter().map(|g| g.name.as_str()).collect();
            lines.push(format!("{:<16}{}", "Goals:", names.join(", ")));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Goal {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Goal #{}", self.id));
        push_field(&mut lines, "Name", &self.name);
        push_field(&mut lines, "Title", &self.title);
        lines.push(format!("{:<16}{}", "Campaign:", self.campaign_id));
        lines.push(format!(
            "{:<16}{} ({})",
            "Payout:", self.payout_rate, self.payout_type
        ));
        lines.push(format!("{:<16}{}", "Payouts:", self.payouts));
        lines.join("\n")
    }
}

impl PrettyPrint for Conversion {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Conversion #{}", self.id));
        push_field(&mut lines, "Goal", &self.goal_name);
        push_field(&mut lines, "Status", &self.status);
        lines.push(format!("{:<16}{} sats", "Amount:", self.amount));
        push_field(&mut lines, "Payout After", &self.payout_after);
        push_field(&mut lines, "Tx", &self.tx_id);
        lines.join("\n")
    }
}

impl PrettyPrint for Link {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Link #{}", self.id));
        push_field(&mut lines, "Short Code", &self.short_code);
        push_field(&mut lines, "URL", &self.short_code_url);
        lines.push(format!("{:<16}{}", "Campaign:", self.campaign_id));
        lines.push(format!("{:<16}{}", "User:", self.user_id));
        lines.join("\n")
    }
}

impl PrettyPrint for VisitorSession {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Session {}", self.tncpw_session));
        lines.push(format!("{:<16}{}", "Campaign:", self.campaign_id));
        lines.push(format!("{:<16}{}", "Link:", self.link_id));
        push_field(&mut lines, "IP Address", &self.ip_address);
        push_field(&mut lines, "Referer", &self.referer);
        lines.join("\n")
    }
}

impl PrettyPrint for Rate {
    fn pretty_print(&self) -> String {
        let name = if self.currency_name.is_empty() {
            &self.currency
        } else {
            &self.currency_name
        };
        let mut lines = header(format!("Rate: {name}"));
        lines.push(format!("{:<16}{}", "Price:", self.price));
        lines.push(format!(
            "{:<16}{} = {} sats",
            "Amount:", self.currency_amount, self.price_in_satoshis
        ));
        push_field(&mut lines, "Updated", &self.rate_last_updated);
        lines.join("\n")
    }
}
