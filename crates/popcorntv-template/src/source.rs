//! Where templates come from.
//!
//! Recipes never look templates up on their own; they are handed a
//! [`TemplateSource`]. Sources read templates fresh on every call unless
//! wrapped in a [`CachingSource`].

use crate::error::{Error, Result};
use crate::template::Template;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Templates compiled into this crate.
const BUNDLED: &[(&str, &str)] = &[(
    "ProductRecipe",
    include_str!("../templates/ProductRecipe.xml"),
)];

/// A capability to load template text by name.
pub trait TemplateSource: Send + Sync {
    /// Load the raw text of the named template.
    fn load(&self, name: &str) -> Result<String>;

    /// Load and parse the named template.
    fn load_template(&self, name: &str) -> Result<Template> {
        self.load(name).map(|text| Template::parse(&text))
    }
}

impl<S: TemplateSource + ?Sized> TemplateSource for Arc<S> {
    fn load(&self, name: &str) -> Result<String> {
        (**self).load(name)
    }
}

impl<S: TemplateSource + ?Sized> TemplateSource for Box<S> {
    fn load(&self, name: &str) -> Result<String> {
        (**self).load(name)
    }
}

/// Loads `<root>/<name>.<extension>` from disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source for `.xml` templates under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "xml".to_string(),
        }
    }

    /// Use a different file extension (without the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Path a template name maps to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name.contains(['/', '\\'])
            || name == "."
            || name == ".."
        {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", name, self.extension)))
    }
}

impl TemplateSource for DirectorySource {
    fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        tracing::debug!(template = name, path = %path.display(), "loading template");
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::not_found(name),
            _ => Error::Io {
                name: name.to_string(),
                path,
                source,
            },
        })
    }
}

/// Templates held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    templates: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template.
    pub fn with_template(mut self, name: &str, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: &str, text: impl Into<String>) {
        self.templates.insert(name.to_string(), text.into());
    }
}

impl TemplateSource for StaticSource {
    fn load(&self, name: &str) -> Result<String> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }
}

/// The templates shipped with this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    /// Names of all bundled templates.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl TemplateSource for BundledSource {
    fn load(&self, name: &str) -> Result<String> {
        BUNDLED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| Error::not_found(name))
    }
}

/// Remembers templates loaded from an inner source.
///
/// Templates are static for the life of the process, so entries are never
/// invalidated. Failed loads are not remembered.
#[derive(Debug, Default)]
pub struct CachingSource<S> {
    inner: S,
    cache: RwLock<HashMap<String, String>>,
}

impl<S: TemplateSource> CachingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Drop all cached templates.
    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

impl<S: TemplateSource> TemplateSource for CachingSource<S> {
    fn load(&self, name: &str) -> Result<String> {
        if let Some(text) = self.cache.read().get(name) {
            tracing::trace!(template = name, "template cache hit");
            return Ok(text.clone());
        }

        let text = self.inner.load(name)?;
        self.cache.write().insert(name.to_string(), text.clone());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    #[test]
    fn test_directory_source_reads_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Page.xml"), "<p>{{X}}</p>").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.load("Page").unwrap(), "<p>{{X}}</p>");
        assert_eq!(source.load_template("Page").unwrap().placeholders(), vec!["X"]);
    }

    #[test]
    fn test_directory_source_reads_fresh_each_call() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Page.xml");
        std::fs::write(&path, "one").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.load("Page").unwrap(), "one");
        std::fs::write(&path, "two").unwrap();
        assert_eq!(source.load("Page").unwrap(), "two");
    }

    #[test]
    fn test_directory_source_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Page.tvml"), "tvml").unwrap();

        let source = DirectorySource::new(dir.path()).with_extension("tvml");
        assert_eq!(source.load("Page").unwrap(), "tvml");
    }

    #[test]
    fn test_directory_source_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.load("Missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_directory_source_unreadable_is_io() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Binary.xml"), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::create_dir(dir.path().join("Folder.xml")).unwrap();

        let source = DirectorySource::new(dir.path());
        for name in ["Binary", "Folder"] {
            let err = source.load(name).unwrap_err();
            assert!(matches!(err, Error::Io { name: ref n, .. } if n == name));
            assert!(!err.is_not_found());
        }
    }

    #[test]
    fn test_directory_source_rejects_paths() {
        let source = DirectorySource::new("/tmp");
        assert!(matches!(source.load("../etc/passwd"), Err(Error::InvalidName(_))));
        assert!(matches!(source.load(""), Err(Error::InvalidName(_))));
        assert!(matches!(source.load(".."), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new().with_template("A", "alpha");
        assert_eq!(source.load("A").unwrap(), "alpha");
        assert!(source.load("B").unwrap_err().is_not_found());
    }

    #[test]
    fn test_bundled_product_recipe() {
        assert!(BundledSource::names().any(|n| n == "ProductRecipe"));

        let template = BundledSource.load_template("ProductRecipe").unwrap();
        for name in [
            "DIRECTORS",
            "ACTORS",
            "TOMATO_CRITIC_RATING",
            "TOMATO_CRITIC_SCORE",
            "RUNTIME",
            "TITLE",
            "GENRES",
            "DESCRIPTION",
            "SHORT_DESCRIPTION",
            "IMAGE",
            "BACKGROUND_IMAGE",
            "YEAR",
            "RATING",
            "YOUTUBE_PREVIEW_URL",
            "MAGNET",
            "SUGGESTIONS",
            "CAST",
            "WATCHLIST_ACTION",
            "MOVIE_ID",
            "TYPE",
        ] {
            assert!(template.has_placeholder(name), "missing {name}");
        }
        assert!(BundledSource.load("Nope").unwrap_err().is_not_found());
    }

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl TemplateSource for CountingSource {
        fn load(&self, name: &str) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if name == "Missing" {
                return Err(Error::not_found(name));
            }
            Ok(format!("<{name}/>"))
        }
    }

    #[test]
    fn test_caching_source_loads_once() {
        let source = CachingSource::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        assert!(source.is_empty());

        assert_eq!(source.load("A").unwrap(), "<A/>");
        assert_eq!(source.load("A").unwrap(), "<A/>");
        assert_eq!(source.inner().loads.load(Ordering::SeqCst), 1);
        assert_eq!(source.len(), 1);

        source.clear();
        assert_eq!(source.load("A").unwrap(), "<A/>");
        assert_eq!(source.inner().loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_caching_source_does_not_cache_failures() {
        let source = CachingSource::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        assert!(source.load("Missing").is_err());
        assert!(source.load("Missing").is_err());
        assert_eq!(source.inner().loads.load(Ordering::SeqCst), 2);
        assert!(source.is_empty());
    }

    #[test]
    fn test_shared_source() {
        let source: Arc<dyn TemplateSource> = Arc::new(StaticSource::new().with_template("A", "a"));
        assert_eq!(source.load("A").unwrap(), "a");

        let boxed: Box<dyn TemplateSource> = Box::new(BundledSource);
        assert!(boxed.load("ProductRecipe").is_ok());
    }
}
