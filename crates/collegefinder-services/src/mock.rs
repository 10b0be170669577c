//! Mock authenticator.
//!
//! **Not secure.** Accounts live in memory, passwords are kept in plain text,
//! and any non-blank email signs in. It exists so the dashboard flow has a
//! user to greet, nothing more.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use collegefinder_core::error::AuthError;
use collegefinder_core::traits::{Authenticator, User};

struct Account {
    user: User,
    password: String,
}

/// In-memory stand-in for an authentication service.
///
/// Unknown emails sign in as a fresh user named after the email's local
/// part. Registered emails must present the password they registered with.
#[derive(Default)]
pub struct MockAuthenticator {
    accounts: Mutex<HashMap<String, Account>>,
    current: Mutex<Option<User>>,
}

impl MockAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_current(&self, user: &User) {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(user.clone());
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(())
    }
}

fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

impl Authenticator for MockAuthenticator {
    fn name(&self) -> &str {
        "mock"
    }

    fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        require(email, "email")?;
        require(password, "password")?;

        let accounts = self
            .accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let user = match accounts.get(email) {
            Some(account) if account.password == password => account.user.clone(),
            Some(_) => {
                tracing::info!(email, "mock login rejected");
                return Err(AuthError::InvalidCredentials);
            }
            None => User {
                id: Uuid::new_v4(),
                name: name_from_email(email),
                email: email.to_string(),
            },
        };
        drop(accounts);

        tracing::info!(email, "mock login");
        self.set_current(&user);
        Ok(user)
    }

    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        require(name, "name")?;
        require(email, "email")?;
        require(password, "password")?;

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.accounts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(
                email.to_string(),
                Account {
                    user: user.clone(),
                    password: password.to_string(),
                },
            );

        tracing::info!(email, "mock registration");
        self.set_current(&user);
        Ok(user)
    }

    fn logout(&self) {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn current_user(&self) -> Option<User> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
