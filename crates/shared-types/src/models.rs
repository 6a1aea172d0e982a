use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Searchable;

/// Court staff role. Decides which dashboard a user lands on and which
/// actions each case row offers.
///
/// The backend has been seen sending both `"admin"` and `"Admin"`, so
/// parsing is case-insensitive. Unknown values map to `Unknown`, which
/// has no dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Clerk,
    Registrar,
    Judge,
    #[default]
    Unknown,
}

impl UserRole {
    pub const ASSIGNABLE: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Clerk,
        UserRole::Registrar,
        UserRole::Judge,
    ];

    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "clerk" => UserRole::Clerk,
            "registrar" => UserRole::Registrar,
            "judge" => UserRole::Judge,
            _ => UserRole::Unknown,
        }
    }

    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Clerk => "clerk",
            UserRole::Registrar => "registrar",
            UserRole::Judge => "judge",
            UserRole::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Clerk => "Clerk",
            UserRole::Registrar => "Registrar",
            UserRole::Judge => "Judge",
            UserRole::Unknown => "Unknown",
        }
    }

    /// Route a freshly logged-in user is sent to.
    pub fn dashboard_path(&self) -> Option<&'static str> {
        match self {
            UserRole::Admin => Some("/admindashboard"),
            UserRole::Clerk => Some("/clerkdashboard"),
            UserRole::Registrar => Some("/registrardashboard"),
            UserRole::Judge => Some("/judgedashboard"),
            UserRole::Unknown => None,
        }
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from_str_or_default(&s)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

/// A court staff account as returned by `/api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "fullname")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

/// A reference to a user that the backend may send either as a bare id
/// or as a populated document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "UserRefRepr")]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserRefRepr {
    Id(String),
    Populated {
        #[serde(alias = "_id", default)]
        id: String,
        #[serde(default, alias = "fullname")]
        name: String,
    },
}

impl From<UserRefRepr> for UserRef {
    fn from(repr: UserRefRepr) -> Self {
        match repr {
            UserRefRepr::Id(id) => UserRef {
                id,
                name: String::new(),
            },
            UserRefRepr::Populated { id, name } => UserRef { id, name },
        }
    }
}

impl UserRef {
    /// Name if populated, otherwise the raw id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        UserRef {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

/// The `{token, user}` pair returned by login and kept for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Admin request to create a staff account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateUserRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    pub role: UserRole,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Clerk,
        }
    }
}

/// Partial update of a staff account. A blank password is not sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// User counts keyed by role, as returned by `/api/users/roles/count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct RoleCounts(pub std::collections::HashMap<String, u64>);

impl RoleCounts {
    /// Count for a role. Keys differing only in case are summed.
    pub fn count(&self, role: UserRole) -> u64 {
        self.0
            .iter()
            .filter(|(key, _)| UserRole::from_str_or_default(key) == role)
            .map(|(_, n)| *n)
            .sum()
    }

    /// One entry per assignable role, in a stable order, for the role chart.
    pub fn entries(&self) -> Vec<(UserRole, u64)> {
        UserRole::ASSIGNABLE
            .iter()
            .map(|role| (*role, self.count(*role)))
            .collect()
    }
}

/// Everything the admin dashboard shows, fetched as one batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminSummary {
    pub users: u64,
    pub cases: u64,
    pub closed_cases: u64,
    pub roles: RoleCounts,
    pub recent_users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(UserRole::from_str_or_default("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default(" JUDGE "), UserRole::Judge);
        assert_eq!(UserRole::from_str_or_default("registrar"), UserRole::Registrar);
        assert_eq!(UserRole::from_str_or_default("janitor"), UserRole::Unknown);
    }

    #[test]
    fn dashboard_path_per_role() {
        assert_eq!(UserRole::Admin.dashboard_path(), Some("/admindashboard"));
        assert_eq!(UserRole::Judge.dashboard_path(), Some("/judgedashboard"));
        assert_eq!(UserRole::Clerk.dashboard_path(), Some("/clerkdashboard"));
        assert_eq!(UserRole::Registrar.dashboard_path(), Some("/registrardashboard"));
        assert_eq!(UserRole::Unknown.dashboard_path(), None);
    }

    #[test]
    fn user_deserializes_from_mongo_json() {
        let json = r#"{"_id":"665f","fullname":"Ada Clerk","email":"ada@court.gov","role":"Clerk","createdAt":"2024-03-01T09:30:00.000Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "665f");
        assert_eq!(user.name, "Ada Clerk");
        assert_eq!(user.role, UserRole::Clerk);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Registrar).unwrap();
        assert_eq!(json, r#""registrar""#);
    }

    #[test]
    fn user_ref_accepts_id_or_document() {
        let bare: UserRef = serde_json::from_str(r#""j-1""#).unwrap();
        assert_eq!(bare.id, "j-1");
        assert_eq!(bare.display_name(), "j-1");

        let populated: UserRef =
            serde_json::from_str(r#"{"_id":"j-2","name":"Hon. Smith"}"#).unwrap();
        assert_eq!(populated.id, "j-2");
        assert_eq!(populated.display_name(), "Hon. Smith");
    }

    #[test]
    fn user_search_fields_include_role() {
        let user = User {
            id: "1".into(),
            name: "Grace".into(),
            email: "grace@court.gov".into(),
            role: UserRole::Judge,
            created_at: None,
        };
        assert!(crate::matches_query(&user.search_fields(), "JUDGE"));
    }

    #[test]
    fn role_counts_merge_case_variants() {
        let counts: RoleCounts =
            serde_json::from_str(r#"{"admin":1,"Admin":1,"clerk":3,"judge":2}"#).unwrap();
        assert_eq!(counts.count(UserRole::Admin), 2);
        assert_eq!(
            counts.entries(),
            vec![
                (UserRole::Admin, 2),
                (UserRole::Clerk, 3),
                (UserRole::Registrar, 0),
                (UserRole::Judge, 2)
            ]
        );
    }

    #[test]
    fn update_request_skips_missing_fields() {
        let req = UpdateUserRequest {
            name: Some("New Name".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New Name"}));
    }
}
