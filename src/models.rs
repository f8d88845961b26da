use serde::{Deserialize, Serialize};

/// Name emitted for `{BP_NAME}` when the caller supplies none
pub const DEFAULT_NAME: &str = "DEFAULT_NAME";

/// One stored template body and the keys that resolve to it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: usize,
    pub names: Vec<String>,
    pub extensions: Vec<String>,
    pub body: String,
}

/// Per-call generation options
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub name: Option<String>,
    pub functions: Vec<String>,
    pub newlines: bool,
    pub spaces: usize,
}

/// Everything a caller hands over to get one boilerplate file
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlateRequest {
    pub language: Option<String>,
    pub extension: Option<String>,
    pub options: GenerateOptions,
}

impl Template {
    pub fn new(id: usize, body: String) -> Self {
        Self {
            id,
            names: Vec::new(),
            extensions: Vec::new(),
            body,
        }
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// A template is only reachable through at least one name or extension
    pub fn has_key(&self) -> bool {
        !self.names.is_empty() || !self.extensions.is_empty()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.has_key() {
            return Err(crate::BoilError::Load(format!(
                "template {} has no language name or extension",
                self.id
            )));
        }
        Ok(())
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = functions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_newlines(mut self, newlines: bool) -> Self {
        self.newlines = newlines;
        self
    }

    pub fn with_spaces(mut self, spaces: usize) -> Self {
        self.spaces = spaces;
        self
    }

    /// The name to substitute, falling back to [`DEFAULT_NAME`] when absent or empty
    pub fn effective_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME,
        }
    }
}

impl PlateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }
}
