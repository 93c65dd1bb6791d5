use leptos::prelude::*;

use crate::models::{Identity, Role, Session};

/// Reactive handle to the app-wide [`Session`], provided as context at the
/// application root. Copyable so pages can capture it in closures freely.
/// Only the auth pages write through it; everything else reads.
#[derive(Clone, Copy)]
pub struct SessionStore(RwSignal<Session>);

impl SessionStore {
    pub fn identity(&self) -> Option<Identity> {
        self.0.with(|s| s.identity().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(Session::is_authenticated)
    }

    pub fn role(&self) -> Role {
        self.0.with(Session::role)
    }

    pub fn set_identity(&self, identity: Identity) {
        self.0.update(|s| s.set_identity(identity));
    }

    pub fn logout(&self) {
        self.0.update(Session::clear);
    }
}

/// Installs a fresh, unauthenticated session into context. Called once from
/// the root `App` component.
pub fn provide_session() {
    provide_context(SessionStore(RwSignal::new(Session::default())));
}

pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
