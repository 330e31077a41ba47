//! User model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::TonicPowClient;
use crate::error::Result;
use crate::models::{ensure, is_default};
use crate::traits::{Create, Get, Update};

/// A TonicPow user.
///
/// Users earn by promoting campaigns through their links. Password fields
/// are only ever sent, never returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "is_default")]
    pub balance: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub earned: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub email: String,
    #[serde(skip_serializing_if = "is_default")]
    pub email_verified: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub first_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub internal_address: String,
    #[serde(skip_serializing_if = "is_default")]
    pub last_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub middle_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub new_password: String,
    #[serde(skip_serializing_if = "is_default")]
    pub new_password_confirm: String,
    #[serde(skip_serializing_if = "is_default")]
    pub password: String,
    #[serde(skip_serializing_if = "is_default")]
    pub payout_address: String,
    #[serde(skip_serializing_if = "is_default")]
    pub phone: String,
    #[serde(skip_serializing_if = "is_default")]
    pub phone_verified: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub referred_by_user_id: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
}

impl User {
    /// Full display name, skipping empty parts.
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[async_trait]
impl Create for User {
    type Params = User;

    #[tracing::instrument(skip(client, user), fields(email = %user.email))]
    async fn create(client: &TonicPowClient, user: User) -> Result<Self> {
        ensure(!user.email.is_empty(), "missing required attribute: email")?;

        client.post("users", &user, 201).await?.json()
    }
}

#[async_trait]
impl Get for User {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &TonicPowClient, id: u64) -> Result<Self> {
        ensure(id > 0, "missing required attribute: id")?;

        client
            .get(&format!("users/details?id={id}"), 200)
            .await?
            .json()
    }
}

#[async_trait]
impl Update for User {
    #[tracing::instrument(skip(self, client), fields(id = self.id))]
    async fn update(&self, client: &TonicPowClient) -> Result<Self> {
        ensure(self.id > 0, "missing required attribute: id")?;

        client.put("users", self, 200).await?.json()
    }
}

/// Get a user by email address.
#[tracing::instrument(skip(client))]
pub async fn get_user_by_email(client: &TonicPowClient, email: &str) -> Result<User> {
    ensure(!email.is_empty(), "missing required attribute: email")?;

    let path = format!("users/details?email={}", urlencoding::encode(email));
    client.get(&path, 200).await?.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_omits_empty_fields() {
        let user = User {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","password":"secret"}"#);
    }

    #[test]
    fn test_user_full_name() {
        let user = User {
            first_name: "Satoshi".to_string(),
            last_name: "Nakamoto".to_string(),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Satoshi Nakamoto");
    }

    #[tokio::test]
    async fn test_create_requires_email() {
        let client = TonicPowClient::new("key").unwrap();
        let err = User::create(&client, User::default()).await.unwrap_err();
        assert!(matches!(err, crate::TonicPowError::InvalidArgument(_)));
    }
}
