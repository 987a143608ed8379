use serde::{Deserialize, Serialize};

use crate::types::Browser;

/// On-disk shape of config.toml. Every key is optional; CLI flags take
/// precedence over whatever is set here.
#[derive(Deserialize, Serialize, Default)]
pub struct AppConfig {
    pub(super) browser: Option<Browser>,
    pub(super) firefox_profile_path: Option<String>,
    pub(super) chrome_profile_path: Option<String>,
    pub(super) public_output: Option<String>,
    pub(super) private_output: Option<String>,
}
