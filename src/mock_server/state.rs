//! Mock server state management.
//!
//! Provides the in-memory data store for the mock TonicPow API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Campaign, Goal, Rate, User};

/// State shared between the mock server's handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Users indexed by ID.
    pub users: HashMap<u64, User>,

    /// Campaigns indexed by ID. Goals are stored separately.
    pub campaigns: HashMap<u64, Campaign>,

    /// Goals indexed by ID.
    pub goals: HashMap<u64, Goal>,

    /// Rates indexed by lower-case currency code.
    pub rates: HashMap<String, Rate>,

    /// If set, requests must carry this value in the `api_key` header.
    pub required_api_key: Option<String>,

    /// Last ID handed out for a created entity.
    last_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a user to the state.
    pub fn with_user(mut self, user: User) -> Self {
        self.bump_id(user.id);
        self.users.insert(user.id, user);
        self
    }

    /// Add a campaign to the state.
    pub fn with_campaign(mut self, campaign: Campaign) -> Self {
        self.bump_id(campaign.id);
        self.campaigns.insert(campaign.id, campaign);
        self
    }

    /// Add a goal to the state.
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.bump_id(goal.id);
        self.goals.insert(goal.id, goal);
        self
    }

    /// Add a rate to the state.
    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rates.insert(rate.currency.to_lowercase(), rate);
        self
    }

    /// Require an API key on every request.
    pub fn with_required_api_key(mut self, api_key: &str) -> Self {
        self.required_api_key = Some(api_key.to_string());
        self
    }

    fn bump_id(&mut self, id: u64) {
        self.last_id = self.last_id.max(id);
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Get a user by ID.
    pub fn get_user(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Find a user by email (case-insensitive).
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Store a new user, assigning an ID. Passwords are never stored.
    pub fn create_user(&mut self, mut user: User) -> User {
        user.id = self.next_id();
        user.password.clear();
        user.new_password.clear();
        user.new_password_confirm.clear();
        if user.status.is_empty() {
            user.status = "active".to_string();
        }
        self.users.insert(user.id, user.clone());
        user
    }

    /// Apply the non-empty fields of `changes` to a stored user.
    pub fn update_user(&mut self, changes: User) -> Option<&User> {
        let user = self.users.get_mut(&changes.id)?;
        if !changes.first_name.is_empty() {
            user.first_name = changes.first_name;
        }
        if !changes.middle_name.is_empty() {
            user.middle_name = changes.middle_name;
        }
        if !changes.last_name.is_empty() {
            user.last_name = changes.last_name;
        }
        if !changes.payout_address.is_empty() {
            user.payout_address = changes.payout_address;
        }
        if !changes.phone.is_empty() {
            user.phone = changes.phone;
        }
        self.users.get(&changes.id)
    }

    /// Get a campaign with its goals attached.
    pub fn get_campaign(&self, id: u64) -> Option<Campaign> {
        let mut campaign = self.campaigns.get(&id)?.clone();
        campaign.goals = self.goals_for_campaign(id);
        Some(campaign)
    }

    /// All campaigns ordered by ID, goals attached.
    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut ids: Vec<u64> = self.campaigns.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().filter_map(|id| self.get_campaign(id)).collect()
    }

    /// Store a new campaign, assigning an ID.
    pub fn create_campaign(&mut self, mut campaign: Campaign) -> Campaign {
        campaign.id = self.next_id();
        campaign.goals.clear();
        if campaign.currency.is_empty() {
            campaign.currency = "usd".to_string();
        }
        self.campaigns.insert(campaign.id, campaign.clone());
        campaign
    }

    /// Goals belonging to a campaign, ordered by ID.
    pub fn goals_for_campaign(&self, campaign_id: u64) -> Vec<Goal> {
        let mut goals: Vec<Goal> = self
            .goals
            .values()
            .filter(|g| g.campaign_id == campaign_id)
            .cloned()
            .collect();
        goals.sort_by_key(|g| g.id);
        goals
    }

    /// Store a new goal, assigning an ID.
    pub fn create_goal(&mut self, mut goal: Goal) -> Goal {
        goal.id = self.next_id();
        self.goals.insert(goal.id, goal.clone());
        goal
    }

    /// Get a goal by ID.
    pub fn get_goal(&self, id: u64) -> Option<&Goal> {
        self.goals.get(&id)
    }

    /// Remove a goal, returning whether it existed.
    pub fn delete_goal(&mut self, id: u64) -> bool {
        self.goals.remove(&id).is_some()
    }

    /// Get the rate for a currency.
    pub fn get_rate(&self, currency: &str) -> Option<&Rate> {
        self.rates.get(&currency.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: u64, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_state_add_and_get_user() {
        let state = MockState::new().with_user(sample_user(1, "a@b.com"));

        let user = state.get_user(1);
        assert!(user.is_some());
        assert_eq!(user.unwrap().email, "a@b.com");
        assert!(state.find_user_by_email("A@B.COM").is_some());
    }

    #[test]
    fn test_created_ids_follow_fixtures() {
        let mut state = MockState::new().with_user(sample_user(7, "a@b.com"));

        let user = state.create_user(User {
            email: "new@b.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        });
        assert_eq!(user.id, 8);
        assert!(user.password.is_empty());
        assert_eq!(user.status, "active");
    }

    #[test]
    fn test_state_update_user_keeps_unset_fields() {
        let mut state = MockState::new().with_user(User {
            id: 1,
            email: "a@b.com".to_string(),
            first_name: "Original".to_string(),
            last_name: "Name".to_string(),
            ..Default::default()
        });

        let updated = state
            .update_user(User {
                id: 1,
                first_name: "New".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.first_name, "New");
        assert_eq!(updated.last_name, "Name");
        assert_eq!(updated.email, "a@b.com");
    }

    #[test]
    fn test_campaign_goals_attached() {
        let state = MockState::new()
            .with_campaign(Campaign {
                id: 1,
                title: "Launch".to_string(),
                ..Default::default()
            })
            .with_goal(Goal {
                id: 2,
                campaign_id: 1,
                name: "signup".to_string(),
                ..Default::default()
            })
            .with_goal(Goal {
                id: 3,
                campaign_id: 99,
                name: "other".to_string(),
                ..Default::default()
            });

        let campaign = state.get_campaign(1).unwrap();
        assert_eq!(campaign.goals.len(), 1);
        assert_eq!(campaign.goals[0].name, "signup");
    }
}
