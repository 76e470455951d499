use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find the path under which a bean crate
/// is reachable from generated code.
///
/// # Example
///
/// ```rust
/// # use bean_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("bean_reflect"));
/// ```
///
/// Reading and parsing the manifest is not free, so a derive should resolve
/// its path once per invocation and pass it around.
///
/// # Resolution rules
///
/// For each of `dependencies` then `dev-dependencies`:
///
/// 1. the requested crate is listed: `::crate_name`;
/// 2. the name starts with `bean_` and the facade `bean_core` is listed:
///    `::bean_core::short_name` (`bean_reflect` -> `::bean_core::reflect`).
///
/// Otherwise the absolute path `::crate_name` is returned. A crate that
/// derives on its own types should declare `extern crate self as crate_name;`
/// so that this fallback resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

const FACADE_CRATE: &str = "bean_core";
const CRATE_PREFIX: &str = "bean_";
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    // Only ever called with `::ident(::ident)*` built from crate names.
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid crate path"))
    }

    fn find_in_table(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_CRATE)
            .then(|| Self::parse_path(&format!("::{FACADE_CRATE}::{module}")))
    }

    /// Returns the [`syn::Path`] of the crate `name` as seen from the crate
    /// being compiled. See the type-level documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(document) = &self.manifest {
            for table in DEPENDENCY_TABLES {
                if let Some(Item::Table(deps)) = document.get(table)
                    && let Some(path) = Self::find_in_table(deps, name)
                {
                    return path;
                }
            }
        }
        Self::parse_path(&format!("::{name}"))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Parsed manifests are cached per path and reparsed when the file's
    /// modification time changes. Two macro invocations may parse the same
    /// file concurrently; the later insert simply replaces the earlier one.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::modified_time(&path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}
