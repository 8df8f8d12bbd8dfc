mod category;
mod partner;
mod question;

pub use category::*;
pub use partner::*;
pub use question::*;
