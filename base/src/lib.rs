pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "rym-export";

// logging constants
pub const LOGLEVEL: &str = "RYM_EXPORT_LOGLEVEL";
pub const LOGSTYLE: &str = "RYM_EXPORT_STYLE";

// environment overrides for the settings file
pub const SERVER_URL_ENV: &str = "RYM_EXPORT_SERVER_URL";
pub const TOKEN_ENV: &str = "RYM_EXPORT_TOKEN";
