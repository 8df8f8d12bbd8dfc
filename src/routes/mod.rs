pub mod health_checks;
pub mod question;

pub use health_checks::*;
