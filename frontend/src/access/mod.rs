//! Presentation-layer access control. Nothing here is a security boundary;
//! the API must still authorize every request.

pub mod navigation;
pub mod policy;
pub mod role;

pub use navigation::*;
pub use policy::*;
pub use role::*;

/// Where unauthenticated users are sent by default.
pub const SIGN_IN_PATH: &str = "/auth";
/// Where users lacking a required role are sent by the redirecting gate.
pub const ROOT_PATH: &str = "/";
