//! Values transformed on assignment
//!
//! [`Capitalized`] upper-cases whatever is assigned to it; [`User`] uses it
//! for its name and exposes an explicit setter.

mod capitalized;
mod user;

pub use capitalized::Capitalized;
pub use user::User;
