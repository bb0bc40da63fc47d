//! Factory configuration

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Hard cap applied to the `limit` of every list call, bounding the
    /// cost of a single read
    pub max_page_limit: u32,

    /// Namespace tag mixed into derived instance addresses
    pub deployment_tag: String,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            max_page_limit: 100,
            deployment_tag: "verifier".to_string(),
        }
    }
}
