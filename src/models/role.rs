use serde::Serialize;

/// Closed set of user roles. `DbAdmin` is an admin variant intended for
/// the database maintenance surface; it passes every admin gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Staff,
    Admin,
    DbAdmin,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Admin => "admin",
            Role::DbAdmin => "db_admin",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "staff" => Some(Role::Staff),
            "admin" => Some(Role::Admin),
            "db_admin" => Some(Role::DbAdmin),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        Role::from_db_str(&code.to_lowercase())
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::DbAdmin)
    }
}
