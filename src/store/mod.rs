pub mod builtin;
pub mod catalog;
pub mod discovery;

pub use catalog::Catalog;
pub use discovery::{parse_plate_name, PlateDiscovery, PlateKeys};

use crate::models::Template;
use crate::{BoilError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Fold a language name into its lookup form
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Fold an extension into its lookup form, dropping any leading dots
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

#[derive(Debug, Clone)]
struct KeyEntry {
    display: String,
    template: usize,
}

/// Read-only mapping from language names and file extensions to templates.
///
/// Names and extensions live in separate namespaces, so the same literal key
/// may point at different templates in each. Lookups are case-insensitive.
/// The store is immutable once built and can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
    names: BTreeMap<String, KeyEntry>,
    extensions: BTreeMap<String, KeyEntry>,
}

impl TemplateStore {
    /// Load templates from a plates directory or a catalog file
    #[instrument]
    pub fn load(source: &Path) -> Result<Self> {
        let metadata = fs::metadata(source).map_err(|e| {
            BoilError::Load(format!("cannot read template source {}: {}", source.display(), e))
        })?;

        let store = if metadata.is_dir() {
            Self::load_dir(source)?
        } else {
            Self::load_catalog(source)?
        };

        info!(
            "Loaded {} templates ({} languages, {} extensions) from {}",
            store.len(),
            store.names.len(),
            store.extensions.len(),
            source.display()
        );
        Ok(store)
    }

    /// Load every plate file in a directory
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let files = PlateDiscovery::new().find_plate_files(dir)?;
        let mut entries = Vec::with_capacity(files.len());

        for path in files {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| {
                    BoilError::Load(format!("plate file name is not UTF-8: {}", path.display()))
                })?
                .to_string();
            let body = fs::read_to_string(&path).map_err(|e| {
                BoilError::Load(format!("cannot read plate {}: {}", path.display(), e))
            })?;
            entries.push((file_name, body));
        }

        Self::from_entries(entries)
    }

    /// Load a catalog produced by [`TemplateStore::to_catalog`]
    pub fn load_catalog(path: &Path) -> Result<Self> {
        Self::from_catalog(Catalog::read(path)?)
    }

    /// Store built from the plates compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_entries(
            builtin::PLATES
                .iter()
                .map(|(file_name, body)| (file_name.to_string(), body.to_string())),
        )
    }

    /// Build a store from `(file name, body)` pairs.
    ///
    /// Entries are taken in the given order; when two entries claim the same
    /// key the first one keeps it.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut store = Self::default();

        for (file_name, body) in entries {
            let keys = parse_plate_name(&file_name)?;
            debug!("Adding plate {} ({:?}, {:?})", file_name, keys.names, keys.extensions);
            store.insert(&file_name, keys.names, keys.extensions, body);
        }

        Ok(store)
    }

    /// Build a store from a key-value catalog
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;

        let Catalog {
            templates,
            names,
            extensions,
        } = catalog;

        let mut grouped: BTreeMap<usize, (Vec<String>, Vec<String>)> = BTreeMap::new();
        for (name, id) in names {
            grouped.entry(id).or_default().0.push(name);
        }
        for (extension, id) in extensions {
            grouped.entry(id).or_default().1.push(extension);
        }

        let mut store = Self::default();
        for (id, body) in templates {
            let (names, extensions) = grouped.remove(&id).unwrap_or_default();
            store.insert(&format!("template {}", id), names, extensions, body);
        }

        Ok(store)
    }

    /// Export the store as a key-value catalog
    pub fn to_catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();

        for template in &self.templates {
            catalog.templates.insert(template.id, template.body.clone());
            for name in &template.names {
                catalog.names.insert(name.clone(), template.id);
            }
            for extension in &template.extensions {
                catalog.extensions.insert(extension.clone(), template.id);
            }
        }

        catalog
    }

    fn insert(&mut self, source: &str, names: Vec<String>, extensions: Vec<String>, body: String) {
        let id = self.templates.len();
        let names = claim_keys(&mut self.names, source, "language", names, fold_name, id);
        let extensions = claim_keys(
            &mut self.extensions,
            source,
            "extension",
            extensions,
            normalize_extension,
            id,
        );

        let template = Template::new(id, body)
            .with_names(names)
            .with_extensions(extensions);

        if template.validate().is_err() {
            warn!("Skipping {}: every key is already taken by another template", source);
            return;
        }
        self.templates.push(template);
    }

    /// Resolve a language name and/or extension to template text.
    ///
    /// The language is tried first; the extension is only consulted when no
    /// language was given or the language is unknown. Blank arguments count
    /// as absent.
    pub fn resolve(&self, language: Option<&str>, extension: Option<&str>) -> Result<&str> {
        self.template(language, extension)
            .map(|template| template.body.as_str())
    }

    /// Like [`TemplateStore::resolve`], returning the whole template record
    pub fn template(&self, language: Option<&str>, extension: Option<&str>) -> Result<&Template> {
        let language = language.filter(|l| !l.trim().is_empty());
        let extension = extension.filter(|e| !normalize_extension(e).is_empty());

        if language.is_none() && extension.is_none() {
            return Err(BoilError::InsufficientInput);
        }

        let by_name = language.and_then(|l| self.names.get(&fold_name(l)));
        let entry = by_name
            .or_else(|| extension.and_then(|e| self.extensions.get(&normalize_extension(e))))
            .ok_or_else(|| BoilError::not_found(language, extension))?;

        debug!(
            "Resolved language={:?} extension={:?} to template {}",
            language, extension, entry.template
        );
        Ok(&self.templates[entry.template])
    }

    /// Known language names, sorted
    pub fn list_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.names.values().map(|e| e.display.clone()).collect();
        languages.sort();
        languages
    }

    /// Known extensions with a leading `.`, sorted
    pub fn list_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self
            .extensions
            .values()
            .map(|e| format!(".{}", e.display))
            .collect();
        extensions.sort();
        extensions
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn claim_keys(
    namespace: &mut BTreeMap<String, KeyEntry>,
    source: &str,
    kind: &str,
    keys: Vec<String>,
    normalize: fn(&str) -> String,
    template: usize,
) -> Vec<String> {
    let mut claimed = Vec::new();

    for key in keys {
        let folded = normalize(&key);
        if folded.is_empty() {
            continue;
        }
        if let Some(existing) = namespace.get(&folded) {
            if existing.template != template {
                warn!("Ignoring {} '{}' from {}: already defined", kind, key, source);
            }
            continue;
        }
        let display = key.trim().trim_start_matches('.').to_string();
        namespace.insert(folded, KeyEntry { display: display.clone(), template });
        claimed.push(display);
    }

    claimed
}
