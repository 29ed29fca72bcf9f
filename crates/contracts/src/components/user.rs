use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

/// A row of the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl User {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Disabled"
        }
    }

    /// CSS class of the table row: `user {role} {active|disabled}`.
    pub fn row_class(&self) -> String {
        let status = if self.is_active { "active" } else { "disabled" };
        format!("user {} {}", self.role.as_str(), status)
    }
}
