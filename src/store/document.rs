//! The cached config document
//!
//! A JSON object with two known string keys. Any other keys found in the file
//! are carried along untouched.

use crate::types::HookConfig;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key holding the launch options appended to every game
pub const GLOBAL_LAUNCH_OPTIONS: &str = "globalLaunchOptions";

/// Key holding the game ids the launch options are not applied to
pub const EXCLUDED_GAME_IDS: &str = "excludedGameIds";

/// In-memory copy of `config.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    entries: Map<String, Value>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        let mut entries = Map::new();
        entries.insert(GLOBAL_LAUNCH_OPTIONS.to_string(), Value::from(""));
        entries.insert(EXCLUDED_GAME_IDS.to_string(), Value::from(""));
        Self { entries }
    }
}

impl ConfigDocument {
    /// Document holding only the two known keys, both empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Shallow merge: overwrite matching top-level keys, keep the rest, append new ones
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            self.entries.insert(key, value);
        }
    }

    /// Copy of this document with `patch` merged in
    pub fn merged(&self, patch: Map<String, Value>) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation, as written to disk
    pub fn to_pretty_json(&self) -> String {
        // A map of `Value`s with string keys always serializes.
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }

    /// The two-key view consumed by the host's launch hooks
    pub fn hook_config(&self) -> HookConfig {
        HookConfig {
            global_launch_options: self.string_or_empty(GLOBAL_LAUNCH_OPTIONS),
            excluded_game_ids: self.string_or_empty(EXCLUDED_GAME_IDS),
        }
    }

    fn string_or_empty(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Value::String(s)) => s.clone(),
            None => String::new(),
            Some(other) => {
                tracing::warn!("Ignoring non-string value for {}: {}", key, other);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_default_has_both_keys() {
        let doc = ConfigDocument::new();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"globalLaunchOptions": "", "excludedGameIds": ""})
        );
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut doc = ConfigDocument::new();
        doc.merge(object(json!({"nested": {"a": 1, "b": 2}})));
        doc.merge(object(json!({"nested": {"c": 3}, "globalLaunchOptions": "-novid"})));

        assert_eq!(doc.get("nested"), Some(&json!({"c": 3})));
        assert_eq!(doc.get(GLOBAL_LAUNCH_OPTIONS), Some(&json!("-novid")));
        assert_eq!(doc.get(EXCLUDED_GAME_IDS), Some(&json!("")));
    }

    #[test]
    fn test_merged_leaves_original() {
        let doc = ConfigDocument::new();
        let next = doc.merged(object(json!({"excludedGameIds": "570"})));

        assert_eq!(doc.get(EXCLUDED_GAME_IDS), Some(&json!("")));
        assert_eq!(next.get(EXCLUDED_GAME_IDS), Some(&json!("570")));
    }

    #[test]
    fn test_key_order_preserved() {
        let mut doc = ConfigDocument::new();
        doc.merge(object(json!({"zeta": 1})));
        doc.merge(object(json!({"alpha": 2})));

        let keys: Vec<&str> = doc.entries().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![GLOBAL_LAUNCH_OPTIONS, EXCLUDED_GAME_IDS, "zeta", "alpha"]
        );
    }

    #[test]
    fn test_pretty_json_indent() {
        let doc = ConfigDocument::new();
        assert_eq!(
            doc.to_pretty_json(),
            "{\n  \"globalLaunchOptions\": \"\",\n  \"excludedGameIds\": \"\"\n}"
        );
    }

    #[test]
    fn test_hook_config_coerces_non_strings() {
        let mut doc = ConfigDocument::new();
        doc.merge(object(json!({
            "globalLaunchOptions": "-high",
            "excludedGameIds": 730
        })));

        let hook = doc.hook_config();
        assert_eq!(hook.global_launch_options, "-high");
        assert_eq!(hook.excluded_game_ids, "");
    }
}
