//! JSON output for extracted values.

use crate::error::Result;
use serde::Serialize;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Serialize any extracted value (tables, properties, summary) to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(value)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoreProperties, Table};

    #[test]
    fn test_tables_compact() {
        let tables: Vec<Table> = vec![vec![vec!["A".into(), "B".into()]]];
        let json = to_json(&tables, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"[[["A","B"]]]"#);
    }

    #[test]
    fn test_properties_pretty() {
        let mut props = CoreProperties::new();
        props.insert("title".to_string(), "Report".to_string());
        let json = to_json(&props, JsonFormat::default()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"title\": \"Report\""));
    }
}
