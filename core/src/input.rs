use std::collections::HashMap;
use anyhow::{anyhow, Result};

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub counts: HashMap<String, String>,
}

// `submit Alice Smith bottle:2 cup:1` — bare words join into the display
// name, key:value pairs become counts. Values stay raw strings here; the
// caller decides what a valid count is.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut counts = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                counts.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        counts,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let args = vec![
            "Alice".to_string(),
            "Smith".to_string(),
            "bottle:2".to_string(),
            "cup:1".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.name, "Alice Smith");
        assert_eq!(parsed.counts.get("bottle"), Some(&"2".to_string()));
        assert_eq!(parsed.counts.get("cup"), Some(&"1".to_string()));
    }

    #[test]
    fn test_expand_product_keys() {
        let candidates = vec![
            "bottle", "container", "bags", "wrap", "cup", "liners", "wrapper",
        ];

        assert_eq!(expand_key("bo", &candidates).unwrap(), "bottle");
        assert_eq!(expand_key("ba", &candidates).unwrap(), "bags");
        assert_eq!(expand_key("co", &candidates).unwrap(), "container");
        assert_eq!(expand_key("cu", &candidates).unwrap(), "cup");
        assert_eq!(expand_key("li", &candidates).unwrap(), "liners");

        // Exact match wins even when it prefixes another key
        assert_eq!(expand_key("wrap", &candidates).unwrap(), "wrap");
        assert_eq!(expand_key("wrappe", &candidates).unwrap(), "wrapper");

        // Ambiguous
        assert!(expand_key("b", &candidates).is_err()); // bottle, bags
        assert!(expand_key("c", &candidates).is_err()); // container, cup
        assert!(expand_key("w", &candidates).is_err()); // wrap, wrapper

        // Unknown
        assert!(expand_key("straw", &candidates).is_err());
    }
}
