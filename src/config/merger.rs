//! Deep merge for layered YAML configuration.
//!
//! `config.local.yml` is overlaid onto `config.yml` before parsing.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively (so `sites:` entries accumulate)
//! - Sequences are replaced entirely (a local `templates:` list wins outright)
//! - Null values in the overlay delete the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values, `overlay` taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
