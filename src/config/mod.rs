mod app_config;
mod settings;

pub use app_config::{parse_extension_list, AppConfig};
pub use settings::Settings;
