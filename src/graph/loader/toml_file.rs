use serde::Deserialize;
use std::collections::HashMap;

use super::{build_from_entries, KnowledgeBaseFormat};
use crate::error::{KbdiagError, Result};
use crate::graph::KnowledgeBase;

/// TOML knowledge base: an `[edges]` table of `"node" = ["successor", ...]`.
pub struct TomlFormat;

#[derive(Debug, Deserialize)]
struct TomlKnowledgeBase {
    #[serde(default)]
    edges: HashMap<String, Vec<String>>,
}

impl KnowledgeBaseFormat for TomlFormat {
    fn can_parse(&self, extension: &str) -> bool {
        extension == "toml"
    }

    fn parse(&self, content: &str, path: &str) -> Result<KnowledgeBase> {
        let parsed: TomlKnowledgeBase = toml::from_str(content)
            .map_err(|e| KbdiagError::Parse(format!("TOML parse error in {}: {}", path, e)))?;
        build_from_entries(parsed.edges, path)
    }
}
