pub mod home;
pub mod members;
pub mod sign_in;

pub use home::*;
pub use members::*;
pub use sign_in::*;
