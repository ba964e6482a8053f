use crate::error::BackendError;

/// An authenticated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Authentication provider trait - lets the board run with or without sign-in
pub trait AccountGate {
    /// Non-blocking check for the current session
    fn current_user(&self) -> Option<&User>;

    /// Start a sign-in flow; resolves to the new identity, or None if abandoned
    fn sign_in(&mut self) -> Result<Option<User>, BackendError>;

    /// End the current session
    fn sign_out(&mut self) -> Result<(), BackendError>;
}

/// Gate for the anonymous static-manifest board: nobody is ever signed in
#[derive(Debug, Default)]
pub struct AnonymousGate;

impl AccountGate for AnonymousGate {
    fn current_user(&self) -> Option<&User> {
        None
    }

    fn sign_in(&mut self) -> Result<Option<User>, BackendError> {
        Err(BackendError::Rejected(
            "sign-in is not available on this board".to_string(),
        ))
    }

    fn sign_out(&mut self) -> Result<(), BackendError> {
        Ok(())
    }
}

/// In-process account gate that signs in a fixed identity
#[derive(Debug)]
pub struct MemoryAccount {
    identity: User,
    session: Option<User>,
}

impl MemoryAccount {
    /// Signed-out gate that will sign in as `identity`
    pub fn new(identity: User) -> Self {
        Self {
            identity,
            session: None,
        }
    }

    /// Gate that already has an active session
    pub fn signed_in(identity: User) -> Self {
        Self {
            session: Some(identity.clone()),
            identity,
        }
    }
}

impl AccountGate for MemoryAccount {
    fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    fn sign_in(&mut self) -> Result<Option<User>, BackendError> {
        log::debug!("Signing in as {}", self.identity.name);
        self.session = Some(self.identity.clone());
        Ok(self.session.clone())
    }

    fn sign_out(&mut self) -> Result<(), BackendError> {
        self.session = None;
        Ok(())
    }
}
