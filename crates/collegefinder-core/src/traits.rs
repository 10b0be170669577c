//! Collaborator trait definitions for storage and authentication.
//!
//! These traits are implemented by the `collegefinder-services` crate. The
//! core only ever receives them as explicit parameters; nothing here reaches
//! for global state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, StorageError};

// ---------------------------------------------------------------------------
// Key-value storage trait
// ---------------------------------------------------------------------------

/// Text storage keyed by fixed string keys.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// Authentication trait
// ---------------------------------------------------------------------------

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Session-local identifier.
    pub id: Uuid,
    /// Display name used in greetings.
    pub name: String,
    pub email: String,
}

/// Authentication backend.
///
/// Implementations decide what a valid credential is. The only one shipped
/// with collegefinder is a mock and provides no security.
pub trait Authenticator: Send + Sync {
    /// Human-readable backend name (e.g. "mock").
    fn name(&self) -> &str;

    /// Sign in with an email and password.
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account and sign in.
    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Sign out the current user, if any.
    fn logout(&self);

    /// The currently signed-in user.
    fn current_user(&self) -> Option<User>;
}
