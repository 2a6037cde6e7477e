// Input module - host entry and validation

pub mod hostname;
pub mod prompt;

pub use hostname::{HostResolver, HostValidator, SystemResolver, ValidatedHost, check_syntax};
pub use prompt::prompt_for_host;
