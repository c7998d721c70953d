pub mod errors;
pub mod types;

pub use errors::{ConfigError, EvenpaneError, GatewayError, LayoutError};
pub use types::{Dimensions, Offset, Orientation, PaneId};

pub type Result<T> = std::result::Result<T, EvenpaneError>;
