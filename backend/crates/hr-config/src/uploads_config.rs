use crate::DEFAULT_UPLOADS_DIR;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Directory profile images are stored in, relative to the working
    /// directory. Served publicly under /uploads.
    pub dir: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_UPLOADS_DIR),
        }
    }
}
