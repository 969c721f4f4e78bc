use std::collections::HashMap;

use super::{build_from_entries, KnowledgeBaseFormat};
use crate::error::{KbdiagError, Result};
use crate::graph::KnowledgeBase;

/// JSON knowledge base: `{ "node": ["successor", ...], ... }`
pub struct JsonFormat;

impl KnowledgeBaseFormat for JsonFormat {
    fn can_parse(&self, extension: &str) -> bool {
        extension == "json"
    }

    fn parse(&self, content: &str, path: &str) -> Result<KnowledgeBase> {
        let edges: HashMap<String, Vec<String>> = serde_json::from_str(content)
            .map_err(|e| KbdiagError::Parse(format!("JSON parse error in {}: {}", path, e)))?;
        build_from_entries(edges, path)
    }
}
