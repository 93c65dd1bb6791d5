use thiserror::Error;

/// Authentication error taxonomy.
///
/// The identity resolver never actually fails, so `InvalidCredentials` is
/// unreachable from the resolver itself; it exists so the login page's
/// error arm is exercised by type rather than stringly-typed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Unknown role '{0}'")]
    UnknownRole(String),
}
