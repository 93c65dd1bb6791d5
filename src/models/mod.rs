mod campaign;
mod draft;
mod identity;
mod role;
mod session;

pub use campaign::*;
pub use draft::*;
pub use identity::*;
pub use role::*;
pub use session::*;
