mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const SERVER_NAME: &str = "cadence";
pub const SERVER_VERSION: &str = built_info::PKG_VERSION;
pub const API_PREFIX: &str = "/api";
pub const ENV_PREFIX: &str = const_format::concatcp!(SERVER_NAME, "_");
