use std::env;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://www.opinet.co.kr/api/areaAvgRecentPrice.do";
pub const DEFAULT_REPORT_CODE: &str = "F250713595";
/// Opinet area code for the tracked region.
pub const DEFAULT_AREA_CODE: &str = "05";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub report_code: String,
    pub area_code: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            report_code: DEFAULT_REPORT_CODE.to_string(),
            area_code: DEFAULT_AREA_CODE.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Defaults, with `OPINET_OUTPUT_DIR` taking precedence when set.
    /// `OPINET_ENDPOINT` points the fetch at a stand-in server for testing; the
    /// report and area codes are fixed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(endpoint) = set("OPINET_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(dir) = set("OPINET_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }
}
