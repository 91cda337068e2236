use crate::recipes::{DEFAULT_CONTENT_TYPE, PRODUCT_TEMPLATE};
use popcorntv_template::UnboundPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub product: ProductConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplatesConfig {
    /// Directory holding `<name>.<extension>` templates; bundled templates when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,

    /// Keep loaded templates in memory
    #[serde(default = "default_true")]
    pub cache: bool,

    /// Fail on placeholders without a value instead of leaving them in the output
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl TemplatesConfig {
    pub fn unbound_policy(&self) -> UnboundPolicy {
        if self.strict {
            UnboundPolicy::Error
        } else {
            UnboundPolicy::Keep
        }
    }
}

fn default_extension() -> String {
    "xml".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
            cache: true,
            strict: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductConfig {
    #[serde(default = "default_product_template")]
    pub template: String,

    /// Literal used for `{{TYPE}}`
    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Render an empty document when the template is missing
    #[serde(default)]
    pub fallback_to_empty: bool,
}

fn default_product_template() -> String {
    PRODUCT_TEMPLATE.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            template: default_product_template(),
            content_type: default_content_type(),
            fallback_to_empty: false,
        }
    }
}
