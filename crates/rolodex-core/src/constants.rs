/// Name used for the binary, the environment prefix, and log targets.
pub const APP_NAME: &str = "rolodex";

/// Prefix for environment-variable configuration (`ROLODEX_CODEC__MAX_INPUT_BYTES`).
pub const ENV_PREFIX: &str = "ROLODEX";

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Largest vCard file accepted before parsing (200 KiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 200 * 1024;

/// Default log filter when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
