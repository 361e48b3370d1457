//! Identity and admin gating.
//!
//! Role assignment mirrors the deployment convention: accounts whose email
//! contains the admin marker are administrators, everyone else is a visitor.

use parking_lot::Mutex;

use crate::interface::PortfolioError;

/// Substring that marks an email as an administrator account.
pub const ADMIN_MARKER: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Visitor,
}

/// An authenticated account with its resolved role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    /// Classify an email address. Malformed addresses never gain admin.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let role = if validator::validate_email(email.as_str()) && email.contains(ADMIN_MARKER) {
            Role::Admin
        } else {
            Role::Visitor
        };
        Self { email, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Session identity source.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<Identity>;
    fn sign_out(&self);
}

/// Gate for admin operations: the caller must be signed in with an admin
/// identity, otherwise `Unauthorized`.
pub fn authorize_admin(provider: &dyn AuthProvider) -> Result<Identity, PortfolioError> {
    match provider.current_user() {
        Some(identity) if identity.is_admin() => Ok(identity),
        _ => Err(PortfolioError::Unauthorized),
    }
}

/// Fixed-identity provider for tests and embedded sessions.
pub struct StaticAuthProvider {
    user: Mutex<Option<Identity>>,
}

impl StaticAuthProvider {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            user: Mutex::new(Some(identity)),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Option<Identity> {
        self.user.lock().clone()
    }

    fn sign_out(&self) {
        *self.user.lock() = None;
    }
}
