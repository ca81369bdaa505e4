use crate::common::check_errors::CheckError;
use crate::common::secret::Secret;
use serde::Deserialize;
use serde_json::Value;

/// Selected transfer mode: `(choice name, fixed value)`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModeChoice(pub String, pub Option<String>);

impl ModeChoice {
    pub fn is_active(&self) -> bool {
        self.1.as_deref() == Some("active")
    }
}

/// Validated parameters of one FTP benchmark rule.
///
/// `None` means the argument is left out of the command line. Keys missing
/// from the raw document get the defaults below, an explicit `null` stays `None`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BenchmarkParams {
    pub host: Option<String>,
    #[serde(default = "default_port")]
    pub port: Option<i64>,
    pub user: Option<String>,
    pub password: Option<Secret>,
    pub mode: Option<ModeChoice>,
    pub path: Option<String>,
    #[serde(default = "default_file_size")]
    pub file_size: Option<i64>,
    #[serde(default = "default_download_benchmarking")]
    pub download_benchmarking: Option<bool>,
    #[serde(default = "default_count")]
    pub download_count: Option<i64>,
    #[serde(default = "default_upload_benchmarking")]
    pub upload_benchmarking: Option<bool>,
    #[serde(default = "default_count")]
    pub upload_count: Option<i64>,
}

fn default_port() -> Option<i64> {
    Some(21)
}

fn default_file_size() -> Option<i64> {
    Some(1)
}

fn default_download_benchmarking() -> Option<bool> {
    Some(true)
}

fn default_upload_benchmarking() -> Option<bool> {
    Some(false)
}

fn default_count() -> Option<i64> {
    Some(10)
}

pub fn parse_params(raw: &Value) -> Result<BenchmarkParams, CheckError> {
    Ok(BenchmarkParams::deserialize(raw)?)
}
