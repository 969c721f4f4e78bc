use serde_yaml_ng::Value as YamlValue;

use super::{build_from_entries, KnowledgeBaseFormat};
use crate::error::{KbdiagError, Result};
use crate::graph::KnowledgeBase;

/// YAML knowledge base: a mapping of node to a sequence of successors.
/// A node mapped to `~` (null) is a leaf.
pub struct YamlFormat;

impl KnowledgeBaseFormat for YamlFormat {
    fn can_parse(&self, extension: &str) -> bool {
        matches!(extension, "yaml" | "yml")
    }

    fn parse(&self, content: &str, path: &str) -> Result<KnowledgeBase> {
        let yaml_value: YamlValue = serde_yaml_ng::from_str(content)
            .map_err(|e| KbdiagError::Parse(format!("YAML parse error in {}: {}", path, e)))?;

        let map = match yaml_value {
            YamlValue::Mapping(map) => map,
            YamlValue::Null => return Ok(KnowledgeBase::new()),
            _ => {
                return Err(KbdiagError::Parse(format!(
                    "YAML knowledge base {} must be a mapping of node to successors",
                    path
                )))
            }
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let node = scalar_label(&key).ok_or_else(|| {
                KbdiagError::Parse(format!("Non-scalar node label in {}", path))
            })?;
            let successors = match value {
                YamlValue::Null => Vec::new(),
                YamlValue::Sequence(seq) => seq
                    .iter()
                    .map(|v| {
                        scalar_label(v).ok_or_else(|| {
                            KbdiagError::Parse(format!(
                                "Successor of '{}' in {} is not a scalar",
                                node, path
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                _ => {
                    return Err(KbdiagError::Parse(format!(
                        "Successors of '{}' in {} must be a sequence",
                        node, path
                    )))
                }
            };
            entries.push((node, successors));
        }

        build_from_entries(entries, path)
    }
}

fn scalar_label(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => scalar_label(&tagged.value),
        _ => None,
    }
}
