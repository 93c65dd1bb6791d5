use leptos::prelude::*;

use crate::models::Identity;

/// Login server function. Mock identity layer: the credentials are never
/// verified, so this always succeeds after the resolver's artificial delay.
/// An unrecognized role string falls back to `donor`, the same defaulting
/// rule the login page applies to its `role` query parameter.
#[server(Login, "/api")]
pub async fn login(
    email: String,
    password: String,
    role: String,
) -> Result<Identity, ServerFnError> {
    use crate::models::Role;

    let role = Role::parse_or_donor(&role);
    Ok(crate::services::identity::resolve_login(email, password, role).await)
}

/// Register server function. Always succeeds; the new identity carries the
/// supplied name and a timestamp-derived id.
#[server(Register, "/api")]
pub async fn register(
    name: String,
    email: String,
    password: String,
    role: String,
) -> Result<Identity, ServerFnError> {
    use crate::models::Role;

    let role = Role::parse_or_donor(&role);
    Ok(crate::services::identity::resolve_register(name, email, password, role).await)
}
