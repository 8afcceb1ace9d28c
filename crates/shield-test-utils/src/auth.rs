//! [`ScriptedAuth`] stands in for the network client's login call.

use shield_core::{AuthError, Authenticate, ClientDescriptor, LocalAuth};
use std::cell::RefCell;

/// One recorded call to [`ScriptedAuth::authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCall {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// Authenticator double that returns a fixed outcome and records calls.
#[derive(Debug)]
pub struct ScriptedAuth {
    outcome: Result<Option<String>, String>,
    calls: RefCell<Vec<AuthCall>>,
}

impl ScriptedAuth {
    /// Succeed, handing back `session`.
    pub fn succeeding(session: &str) -> Self {
        Self {
            outcome: Ok(Some(session.to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Succeed without a session token.
    pub fn succeeding_without_session() -> Self {
        Self {
            outcome: Ok(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Authenticate for ScriptedAuth {
    fn authenticate(
        &self,
        client: &ClientDescriptor,
        auth: &LocalAuth,
    ) -> Result<Option<String>, AuthError> {
        self.calls.borrow_mut().push(AuthCall {
            url: client.url.clone(),
            username: auth.username.clone(),
            password: auth.password.clone(),
        });
        self.outcome.clone().map_err(AuthError::new)
    }
}
