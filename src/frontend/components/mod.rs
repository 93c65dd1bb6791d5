mod alert;
mod badge;
mod button;
mod card;
mod footer;
mod input;
mod nav;
mod progress;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use footer::*;
pub use input::*;
pub use nav::*;
pub use progress::*;
