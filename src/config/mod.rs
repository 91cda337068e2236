mod types;

pub use types::*;

use crate::recipes::ProductPageFormatter;
use anyhow::{Context, Result};
use popcorntv_template::{BundledSource, CachingSource, DirectorySource, TemplateSource};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./popcorntv.toml",
        "~/.config/popcorntv/config.toml",
        "/etc/popcorntv/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.templates.extension.trim().is_empty() {
        anyhow::bail!("Template extension cannot be empty");
    }

    if let Some(dir) = &config.templates.dir {
        if !dir.is_dir() {
            tracing::warn!("Template directory does not exist: {:?}", dir);
        }
    }

    if config.product.template.trim().is_empty() {
        anyhow::bail!("Product template name cannot be empty");
    }

    if config.product.content_type.trim().is_empty() {
        anyhow::bail!("Product content type cannot be empty");
    }

    Ok(())
}

impl Config {
    /// Template source described by the `[templates]` section.
    pub fn template_source(&self) -> Box<dyn TemplateSource> {
        let source: Box<dyn TemplateSource> = match &self.templates.dir {
            Some(dir) => {
                let dir = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
                Box::new(DirectorySource::new(dir).with_extension(&self.templates.extension))
            }
            None => Box::new(BundledSource),
        };

        if self.templates.cache {
            Box::new(CachingSource::new(source))
        } else {
            source
        }
    }

    /// Product page formatter described by the `[templates]` and `[product]` sections.
    pub fn product_formatter(&self) -> ProductPageFormatter<Box<dyn TemplateSource>> {
        ProductPageFormatter::new(self.template_source())
            .with_template_name(&self.product.template)
            .with_content_type(&self.product.content_type)
            .with_unbound_policy(self.templates.unbound_policy())
            .with_fallback_to_empty(self.product.fallback_to_empty)
    }
}
