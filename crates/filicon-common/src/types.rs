use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A candidate icon theme file offered by some discovery source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContribution {
    pub id: String,
    pub path: PathBuf,
}

impl ThemeContribution {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// Parse an `ID=PATH` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Option<Self> {
        let (id, path) = pair.split_once('=')?;
        let id = id.trim();
        let path = path.trim();
        if id.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self::new(id, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        let c = ThemeContribution::parse_pair("seti=/themes/a=b.json").unwrap();
        assert_eq!(c.id, "seti");
        assert_eq!(c.path, PathBuf::from("/themes/a=b.json"));
    }

    #[test]
    fn parse_pair_trims_whitespace() {
        let c = ThemeContribution::parse_pair(" seti = themes/seti.json ").unwrap();
        assert_eq!(c.id, "seti");
        assert_eq!(c.path, PathBuf::from("themes/seti.json"));
    }

    #[test]
    fn parse_pair_rejects_incomplete_input() {
        assert!(ThemeContribution::parse_pair("seti").is_none());
        assert!(ThemeContribution::parse_pair("=themes/seti.json").is_none());
        assert!(ThemeContribution::parse_pair("seti=").is_none());
    }

    #[test]
    fn deserializes_from_json_record() {
        let c: ThemeContribution =
            serde_json::from_str(r#"{"id":"seti","path":"themes/seti.json"}"#).unwrap();
        assert_eq!(c, ThemeContribution::new("seti", "themes/seti.json"));
    }
}
