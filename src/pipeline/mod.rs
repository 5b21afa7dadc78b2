pub mod auth;
pub mod cipher;
pub mod derive;
pub mod hash;

pub use auth::*;
pub use cipher::*;
pub use derive::*;
pub use hash::*;
