pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, FiliconError, StyleError, ThemeError};
pub use events::{Subscription, ThemeSubscribers};
pub use id::{new_id, SubscriptionId};
pub use types::ThemeContribution;

pub type Result<T> = std::result::Result<T, FiliconError>;
