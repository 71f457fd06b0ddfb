pub mod character;
pub mod message;
pub mod persona;
pub mod response;
pub mod session;

pub use character::*;
pub use message::*;
pub use persona::*;
pub use response::*;
pub use session::*;
