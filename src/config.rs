//! Compile options and the resource table.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Options controlling a compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Warn when a metadata key is defined more than once
    pub warn_duplicate_metadata: bool,
    /// Warn when a class declares an attribute name more than once
    pub warn_duplicate_attributes: bool,
    /// When set, resource citations in metadata are checked against it
    pub resources: Option<ResourceTable>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            warn_duplicate_metadata: true,
            warn_duplicate_attributes: true,
            resources: None,
        }
    }
}

impl CompileOptions {
    pub fn with_resources(mut self, resources: ResourceTable) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_duplicate_metadata_warnings(mut self, enabled: bool) -> Self {
        self.warn_duplicate_metadata = enabled;
        self
    }

    pub fn with_duplicate_attribute_warnings(mut self, enabled: bool) -> Self {
        self.warn_duplicate_attributes = enabled;
        self
    }
}

/// Resource names shipped with the standard image set, and their file names
const STANDARD_IMAGES: &[(&str, &str)] = &[
    ("MIT", "MIT boilerplate.png"),
    ("MIT_small", "MIT boilerplate small.png"),
    ("mint_large", "mint logo large.png"),
    ("mint_small", "mint logo small.png"),
    ("toy_large", "toyota large.png"),
    ("toy_small", "toyota small.png"),
];

/// Maps resource names cited in metadata to file locations.
///
/// Only lookups happen here; nothing is read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTable {
    entries: IndexMap<String, PathBuf>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard boilerplate and logo images, located under `image_dir`
    pub fn with_standard_images(image_dir: impl AsRef<Path>) -> Self {
        let image_dir = image_dir.as_ref();
        let mut table = Self::new();
        for (name, file) in STANDARD_IMAGES {
            table.insert(*name, image_dir.join(file));
        }
        table
    }

    /// Add or replace an entry
    pub fn insert(&mut self, name: impl Into<String>, location: impl Into<PathBuf>) {
        self.entries.insert(name.into(), location.into());
    }

    pub fn locate(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
