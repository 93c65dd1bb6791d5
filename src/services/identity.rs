//! Identity resolver: fabricates an [`Identity`] for login and registration.
//!
//! There is no real verification behind this: the supplied password is never
//! checked and no branch fails. Both operations suspend for a fixed second to
//! imitate a backend round trip before producing the record.

use std::time::Duration;

use chrono::Utc;

use crate::models::{Identity, Role};

/// Fixed artificial latency for both operations. Not configurable, not
/// cancellable.
const RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// Resolves a login. The display name and avatar are derived purely from the
/// requested role; the password is accepted unchecked, so this function is
/// infallible by construction.
pub async fn resolve_login(email: String, _password: String, role: Role) -> Identity {
    tokio::time::sleep(RESOLVE_DELAY).await;

    let name = role.display_name();
    Identity {
        id: "1".to_string(),
        name: name.to_string(),
        email,
        role,
        avatar_url: Some(Identity::avatar_for(name)),
    }
}

/// Resolves a registration. The identity carries the caller-supplied name
/// verbatim and a timestamp-derived id.
pub async fn resolve_register(
    name: String,
    email: String,
    _password: String,
    role: Role,
) -> Identity {
    tokio::time::sleep(RESOLVE_DELAY).await;

    let avatar_url = Some(Identity::avatar_for(&name));
    Identity {
        id: Utc::now().timestamp_millis().to_string(),
        name,
        email,
        role,
        avatar_url,
    }
}
