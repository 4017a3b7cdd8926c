//! Lookup of module-qualified names in a resolved module map.
//!
//! Module map files (`name.sub : "path/$ENV$/file"`) are parsed and their
//! environment references substituted elsewhere; the front end only sees
//! the finished mapping.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// A resolved mapping from dotted module names to source paths.
///
/// # Examples
///
/// ```
/// use core_types::ModuleMap;
/// use std::collections::HashMap;
/// use std::path::PathBuf;
///
/// let mut map = HashMap::new();
/// map.insert("std.io".to_string(), PathBuf::from("/lib/std/io.dl"));
///
/// assert_eq!(map.resolve("std.io").unwrap().to_str(), Some("/lib/std/io.dl"));
/// assert!(map.resolve("std").is_none());
/// ```
pub trait ModuleMap {
    /// Path of the module named `qualified_name`, if mapped
    fn resolve(&self, qualified_name: &str) -> Option<&Path>;
}

impl ModuleMap for HashMap<String, PathBuf> {
    fn resolve(&self, qualified_name: &str) -> Option<&Path> {
        self.get(qualified_name).map(PathBuf::as_path)
    }
}

impl ModuleMap for BTreeMap<String, PathBuf> {
    fn resolve(&self, qualified_name: &str) -> Option<&Path> {
        self.get(qualified_name).map(PathBuf::as_path)
    }
}
