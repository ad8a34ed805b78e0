// debugpaste - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no platform
// dependencies.

use crate::util::error::ArgumentError;

// =============================================================================
// Application
// =============================================================================

/// Consuming systems the paste service accepts submissions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    PlotSquared,
    FastAsyncWorldEdit,
    IncendoPermissions,
    Kvantum,
}

impl Application {
    /// Returns all variants in the order the service documents them.
    pub fn all() -> &'static [Application] {
        &[
            Application::PlotSquared,
            Application::FastAsyncWorldEdit,
            Application::IncendoPermissions,
            Application::Kvantum,
        ]
    }

    /// Canonical lower-case tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Application::PlotSquared => "plotsquared",
            Application::FastAsyncWorldEdit => "fastasyncworldedit",
            Application::IncendoPermissions => "incendopermissions",
            Application::Kvantum => "kvantum",
        }
    }

    /// Resolve a tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Result<Self, ArgumentError> {
        if tag.is_empty() {
            return Err(ArgumentError::EmptyApplication);
        }
        Self::all()
            .iter()
            .copied()
            .find(|app| app.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ArgumentError::UnknownApplication {
                name: tag.to_string(),
            })
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Application {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

// =============================================================================
// Paste file
// =============================================================================

/// A named block of text submitted as part of a paste.
///
/// Name and content are validated non-empty at construction and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteFile {
    name: String,
    content: String,
}

impl PasteFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Result<Self, ArgumentError> {
        let name = name.into();
        let content = content.into();
        if name.is_empty() {
            return Err(ArgumentError::EmptyFileName);
        }
        if content.is_empty() {
            return Err(ArgumentError::EmptyContent { name });
        }
        Ok(Self { name, content })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
