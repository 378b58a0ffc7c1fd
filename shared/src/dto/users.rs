//! User accounts as seen by the admin dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::kyc::KycStatus;
use super::query::{push_filter, Filters, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Support,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Support => "support",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub kyc_status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Compact user reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub kyc_status: Option<KycStatus>,
}

impl Filters for UserFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_filter(&mut pairs, "search", &self.search);
        push_filter(&mut pairs, "role", &self.role);
        push_filter(&mut pairs, "status", &self.status);
        push_filter(&mut pairs, "kycStatus", &self.kyc_status);
        pairs
    }
}

/// `GET /users` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub pagination: Pagination,
}

/// Partial profile update; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserStatusRequest {
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_parses_camel_case_payload() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u1",
                "email": "alice@example.com",
                "firstName": "Alice",
                "lastName": "Liddell",
                "role": "admin",
                "status": "active",
                "kycStatus": "under_review",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-02T10:30:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(user.full_name(), "Alice Liddell");
        assert_eq!(user.kyc_status, KycStatus::UnderReview);
        assert_eq!(user.wallet_address, None);
    }

    #[test]
    fn test_user_filters_use_wire_names() {
        let filters = UserFilters {
            search: Some("alice".to_string()),
            role: None,
            status: Some(UserStatus::Suspended),
            kyc_status: Some(KycStatus::Pending),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("search", "alice".to_string()),
                ("status", "suspended".to_string()),
                ("kycStatus", "pending".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let request = UpdateUserRequest {
            phone: Some("+44 20 7946 0000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"phone":"+44 20 7946 0000"}"#
        );
    }
}
