pub mod arrow;
pub mod json;
pub mod toml_file;
pub mod yaml;

use std::path::Path;

use super::KnowledgeBase;
use crate::error::{KbdiagError, Result};

/// Trait for knowledge base file formats
pub trait KnowledgeBaseFormat {
    /// Check if this format handles the given file extension
    fn can_parse(&self, extension: &str) -> bool;

    /// Parse file content into a knowledge base
    fn parse(&self, content: &str, path: &str) -> Result<KnowledgeBase>;
}

/// Format registry that selects the appropriate loader by extension
pub struct FormatRegistry {
    formats: Vec<Box<dyn KnowledgeBaseFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats
    pub fn new() -> Self {
        let mut registry = Self {
            formats: Vec::new(),
        };

        registry.register(Box::new(json::JsonFormat));
        registry.register(Box::new(yaml::YamlFormat));
        registry.register(Box::new(toml_file::TomlFormat));
        registry.register(Box::new(arrow::ArrowFormat));

        registry
    }

    /// Register a format
    pub fn register(&mut self, format: Box<dyn KnowledgeBaseFormat>) {
        self.formats.push(format);
    }

    /// Find a format that can handle the given extension
    pub fn find_format(&self, extension: &str) -> Option<&dyn KnowledgeBaseFormat> {
        self.formats
            .iter()
            .find(|f| f.can_parse(extension))
            .map(|f| f.as_ref())
    }

    /// Parse content using the format registered for the extension
    pub fn parse(&self, content: &str, path: &str, extension: &str) -> Result<KnowledgeBase> {
        let format = self.find_format(extension).ok_or_else(|| {
            KbdiagError::InvalidInput(format!(
                "No knowledge base format for extension '{}' ({})",
                extension, path
            ))
        })?;
        format.parse(content, path)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a knowledge base file, choosing the format from its extension.
pub fn load_knowledge_base(path: &Path) -> Result<KnowledgeBase> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = std::fs::read_to_string(path)?;
    let kb = FormatRegistry::new().parse(&content, &path.to_string_lossy(), &extension)?;

    log::info!(
        "Loaded knowledge base from {} ({} nodes, {} with edges)",
        path.display(),
        kb.node_count(),
        kb.len()
    );
    Ok(kb)
}

/// Trim labels and reject blank ones, then build the knowledge base.
/// Shared by the structured formats, which all deserialize to node -> list.
pub(crate) fn build_from_entries<I>(entries: I, path: &str) -> Result<KnowledgeBase>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let mut edges = Vec::new();
    for (node, successors) in entries {
        let node = clean_label(&node, path)?;
        let successors = successors
            .iter()
            .map(|s| clean_label(s, path))
            .collect::<Result<Vec<_>>>()?;
        edges.push((node, successors));
    }
    Ok(KnowledgeBase::from_edges(edges))
}

fn clean_label(label: &str, path: &str) -> Result<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(KbdiagError::Parse(format!("Empty node label in {}", path)));
    }
    Ok(trimmed.to_string())
}
