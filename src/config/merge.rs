//! Ordered settings merge
//!
//! Layers are applied in order; a later layer replaces any value a previous
//! layer set for the same name. Values are replaced whole, including tables
//! and lists.

use crate::domain::{Layer, Setting, SourceInfo};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Single writer for the working settings mapping.
#[derive(Debug, Default)]
pub struct Merger {
    entries: BTreeMap<String, Setting>,
    sources: Vec<SourceInfo>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one layer on top of everything applied so far.
    pub fn apply(&mut self, layer: Layer) {
        let origin = layer.origin();
        debug!(%origin, settings = layer.values.len(), "Applying settings layer");

        for (name, value) in layer.values {
            match self.entries.entry(name) {
                Entry::Occupied(mut slot) => {
                    let setting = slot.get_mut();
                    setting.shadowed.push(setting.origin);
                    setting.origin = origin;
                    setting.value = value;
                }
                Entry::Vacant(slot) => {
                    slot.insert(Setting { value, origin, shadowed: Vec::new() });
                }
            }
        }
        self.sources.push(layer.source);
    }

    pub fn into_parts(self) -> (BTreeMap<String, Setting>, Vec<SourceInfo>) {
        (self.entries, self.sources)
    }
}

/// Merge layers in order (first is base, last has highest precedence).
pub fn merge_layers(layers: impl IntoIterator<Item = Layer>) -> Merger {
    layers.into_iter().fold(Merger::new(), |mut merger, layer| {
        merger.apply(layer);
        merger
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Origin, SettingsMap};
    use serde_json::{json, Value};

    fn layer(origin: Origin, value: Value) -> Layer {
        let values: SettingsMap = serde_json::from_value(value).expect("object");
        Layer::new(origin, values)
    }

    #[test]
    fn test_later_layer_wins() {
        let merger = merge_layers([
            layer(Origin::Base, json!({"DEBUG": false, "TIME_ZONE": "UTC"})),
            layer(Origin::Profile, json!({"DEBUG": true})),
            layer(Origin::Local, json!({"DEBUG": false})),
        ]);
        let (entries, sources) = merger.into_parts();

        assert_eq!(entries["DEBUG"].value, json!(false));
        assert_eq!(entries["DEBUG"].origin, Origin::Local);
        assert_eq!(entries["DEBUG"].shadowed, vec![Origin::Base, Origin::Profile]);
        assert_eq!(entries["TIME_ZONE"].origin, Origin::Base);
        assert!(entries["TIME_ZONE"].shadowed.is_empty());
        assert_eq!(sources.len(), 3);
    }

    #[test]
    fn test_tables_are_replaced_not_merged() {
        let merger = merge_layers([
            layer(Origin::Base, json!({"DATABASES": {"default": {"ENGINE": "postgres", "NAME": "app"}}})),
            layer(Origin::Local, json!({"DATABASES": {"default": {"ENGINE": "sqlite3"}}})),
        ]);
        let (entries, _) = merger.into_parts();

        assert_eq!(entries["DATABASES"].value, json!({"default": {"ENGINE": "sqlite3"}}));
    }

    #[test]
    fn test_lists_are_replaced() {
        let merger = merge_layers([
            layer(Origin::Base, json!({"ALLOWED_HOSTS": ["example.com", "api.example.com"]})),
            layer(Origin::Profile, json!({"ALLOWED_HOSTS": ["*"]})),
        ]);
        let (entries, _) = merger.into_parts();

        assert_eq!(entries["ALLOWED_HOSTS"].value, json!(["*"]));
    }

    #[test]
    fn test_new_names_are_added() {
        let mut merger = Merger::new();
        merger.apply(layer(Origin::Base, json!({"A": 1})));
        merger.apply(layer(Origin::Local, json!({"B": 2})));
        let (entries, _) = merger.into_parts();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries["B"].origin, Origin::Local);
    }

    #[test]
    fn test_null_overrides_value() {
        let merger = merge_layers([
            layer(Origin::Base, json!({"EMAIL_HOST": "smtp.example.com"})),
            layer(Origin::Local, json!({"EMAIL_HOST": null})),
        ]);
        let (entries, _) = merger.into_parts();

        assert!(entries["EMAIL_HOST"].value.is_null());
    }
}
