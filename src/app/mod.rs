pub mod context;
pub mod error;

pub use context::{AppContext, MailConfig};
pub use error::{CedarError, Result};
