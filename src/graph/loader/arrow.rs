//! Plain-text knowledge base in arrow notation.
//!
//! ```text
//! # comment
//! Palidez -> Labios palidos, Unas quebradizas
//! Labios palidos → Anemia
//! Anemia
//! ```
//!
//! A line without successors (or without an arrow) declares a leaf.

use regex::Regex;

use super::KnowledgeBaseFormat;
use crate::error::{KbdiagError, Result};
use crate::graph::KnowledgeBase;

pub struct ArrowFormat;

impl KnowledgeBaseFormat for ArrowFormat {
    fn can_parse(&self, extension: &str) -> bool {
        matches!(extension, "kb" | "txt")
    }

    fn parse(&self, content: &str, path: &str) -> Result<KnowledgeBase> {
        let line_regex = Regex::new(r"^(?P<source>.*?)\s*(?:->|→)\s*(?P<targets>.*)$")
            .map_err(|e| KbdiagError::Parse(format!("Invalid arrow pattern: {}", e)))?;

        let mut edges: Vec<(String, Vec<String>)> = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = index + 1;

            let (source, targets) = match line_regex.captures(line) {
                Some(cap) => (
                    cap.name("source").map(|m| m.as_str()).unwrap_or(""),
                    cap.name("targets").map(|m| m.as_str()).unwrap_or(""),
                ),
                None => (line, ""),
            };

            let source = source.trim();
            if source.is_empty() {
                return Err(KbdiagError::Parse(format!(
                    "{}:{}: missing source node",
                    path, line_no
                )));
            }

            let mut successors = Vec::new();
            if !targets.trim().is_empty() {
                for target in targets.split(',') {
                    let target = target.trim();
                    if target.is_empty() {
                        return Err(KbdiagError::Parse(format!(
                            "{}:{}: empty successor after '{}'",
                            path, line_no, source
                        )));
                    }
                    successors.push(target.to_string());
                }
            }

            edges.push((source.to_string(), successors));
        }

        Ok(KnowledgeBase::from_edges(edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_format_can_parse() {
        assert!(ArrowFormat.can_parse("kb"));
        assert!(ArrowFormat.can_parse("txt"));
        assert!(!ArrowFormat.can_parse("md"));
    }

    #[test]
    fn test_arrow_basic() {
        let content = "\
# anemia subset
Palidez -> Labios palidos, Unas quebradizas
Labios palidos → Anemia
Anemia
";
        let kb = ArrowFormat.parse(content, "kb.kb").unwrap();
        assert_eq!(
            kb.successors("Palidez"),
            ["Labios palidos".to_string(), "Unas quebradizas".to_string()]
        );
        assert!(kb.has_edge("Labios palidos", "Anemia"));
        assert!(kb.contains("Anemia"));
        assert!(kb.successors("Anemia").is_empty());
    }

    #[test]
    fn test_arrow_parentheses_and_slashes_kept() {
        let kb = ArrowFormat
            .parse("Fatiga -> Alto consumo (cafe/te)\n", "kb.kb")
            .unwrap();
        assert_eq!(kb.successors("Fatiga"), ["Alto consumo (cafe/te)".to_string()]);
    }

    #[test]
    fn test_arrow_trailing_arrow_declares_leaf() {
        let kb = ArrowFormat.parse("Anemia ->\n", "kb.kb").unwrap();
        assert!(kb.contains("Anemia"));
        assert!(kb.successors("Anemia").is_empty());
    }

    #[test]
    fn test_arrow_repeated_source_appends() {
        let kb = ArrowFormat.parse("a -> b\na -> c\n", "kb.kb").unwrap();
        assert_eq!(kb.successors("a"), ["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_arrow_missing_source() {
        let err = ArrowFormat.parse("-> Anemia\n", "kb.kb").unwrap_err();
        assert!(err.to_string().contains("kb.kb:1"));
    }

    #[test]
    fn test_arrow_empty_successor() {
        let err = ArrowFormat.parse("\n\na -> b,,c\n", "kb.kb").unwrap_err();
        assert!(err.to_string().contains("kb.kb:3"));
    }
}
