pub mod content;
mod rsa;

pub use self::content::*;
pub use self::rsa::*;
