pub mod config_reader;

pub use config_reader::{CONFIG_FILE, load_config, parse_config_content};
