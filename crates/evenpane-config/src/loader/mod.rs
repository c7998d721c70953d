//! TOML config file loading.

mod load;
mod paths;


pub use load::{load_default, load_from_path};
pub use paths::default_config_path;
