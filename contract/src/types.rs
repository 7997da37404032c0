//! # Message Types
//!
//! Request and response contracts. Composed shapes (authorization details,
//! scopes, grants, token info) are declared once here and embedded wherever
//! a message carries them.

mod authorization;
mod authorization_details;
mod credential;
mod grant;
mod introspection;
mod token;

pub use self::authorization::*;
pub use self::authorization_details::*;
pub use self::credential::*;
pub use self::grant::*;
pub use self::introspection::*;
pub use self::token::*;
