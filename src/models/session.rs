use crate::models::{Identity, Role};

/// Process-lifetime holder of at most one [`Identity`].
///
/// Absent at startup, set by a successful login or registration, cleared by
/// logout. Never rehydrated from any storage medium, so a reload always
/// returns to the unauthenticated state. Single writer contract: only the
/// auth pages mutate this; everything else treats reads as snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Current role; `Public` when no one is signed in.
    pub fn role(&self) -> Role {
        self.identity.as_ref().map(|i| i.role).unwrap_or_default()
    }

    /// Installs a new identity. A second login silently overwrites the
    /// previous identity; no uniqueness is enforced.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Synchronously clears the identity. No confirmation step.
    pub fn clear(&mut self) {
        self.identity = None;
    }
}
