//! Default values for tsuml configuration.

/// Project-local configuration file name.
pub const CONFIG_FILE_NAME: &str = "tsuml.toml";

/// Application directory under the user config directory.
pub const CONFIG_DIR_NAME: &str = "tsuml";

/// User configuration file name inside [`CONFIG_DIR_NAME`].
pub const USER_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `translate.member_associations`.
pub const ENV_MEMBER_ASSOCIATIONS: &str = "TSUML_MEMBER_ASSOCIATIONS";

/// Member associations are off unless requested.
pub const DEFAULT_MEMBER_ASSOCIATIONS: bool = false;
