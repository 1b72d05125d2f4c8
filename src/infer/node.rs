//! Internal inference tree
//!
//! A [`SchemaNode`] keeps at most one observation slot per JSON shape
//! category (null, boolean, number, string, object, array). Observing a
//! value activates or widens the matching slot; emission turns the active
//! slots back into a schema.

use regex::Regex;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// One node in the inference tree
#[derive(Debug, Clone, Default)]
pub(crate) struct SchemaNode {
    null_seen: bool,
    boolean_seen: bool,
    number: Option<NumberShape>,
    string: Option<StringShape>,
    object: Option<ObjectShape>,
    array: Option<ArrayShape>,
}

#[derive(Debug, Clone)]
struct NumberShape {
    /// True while every observed value was integral
    integral: bool,
}

#[derive(Debug, Clone, Default)]
struct StringShape {
    format: Option<String>,
    /// Once two different formats were seen, no format is ever emitted again
    conflicted: bool,
}

#[derive(Debug, Clone, Default)]
struct ObjectShape {
    properties: BTreeMap<String, SchemaNode>,
    /// Intersection of key sets over observed instances; `None` until the
    /// first instance (or seeded `required` list) constrains it
    required: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, Default)]
struct ArrayShape {
    /// All element observations merge into one node
    items: Option<Box<SchemaNode>>,
}

impl StringShape {
    fn merge_format(&mut self, format: Option<String>) {
        if self.conflicted {
            return;
        }
        match (&self.format, format) {
            (None, Some(format)) => self.format = Some(format),
            (Some(existing), Some(format)) if *existing != format => {
                self.format = None;
                self.conflicted = true;
            }
            // A detected format survives merging with a plain string
            _ => {}
        }
    }
}

impl SchemaNode {
    /// Observe one JSON value instance
    pub(crate) fn observe(&mut self, value: &Value, detect_formats: bool) {
        match value {
            Value::Null => self.null_seen = true,
            Value::Bool(_) => self.boolean_seen = true,
            Value::Number(n) => {
                let integral = n.is_i64() || n.is_u64();
                match &mut self.number {
                    Some(shape) => shape.integral = shape.integral && integral,
                    None => self.number = Some(NumberShape { integral }),
                }
            }
            Value::String(s) => {
                let format = if detect_formats { detect_format(s) } else { None };
                match &mut self.string {
                    Some(shape) => shape.merge_format(format),
                    None => {
                        self.string = Some(StringShape {
                            format,
                            conflicted: false,
                        });
                    }
                }
            }
            Value::Array(elements) => {
                let shape = self.array.get_or_insert_with(ArrayShape::default);
                for element in elements {
                    shape
                        .items
                        .get_or_insert_with(Box::default)
                        .observe(element, detect_formats);
                }
            }
            Value::Object(map) => {
                let shape = self.object.get_or_insert_with(ObjectShape::default);
                let keys: BTreeSet<String> = map.keys().cloned().collect();
                for (key, val) in map {
                    shape
                        .properties
                        .entry(key.clone())
                        .or_default()
                        .observe(val, detect_formats);
                }
                shape.required = Some(match shape.required.take() {
                    None => keys,
                    Some(required) => required.intersection(&keys).cloned().collect(),
                });
            }
        }
    }

    /// Seed this node from an existing schema fragment
    pub(crate) fn seed(&mut self, schema: &Value) {
        let Some(map) = schema.as_object() else {
            return;
        };

        match map.get("type") {
            Some(Value::String(t)) => self.seed_type(t, map),
            Some(Value::Array(types)) => {
                for t in types.iter().filter_map(Value::as_str) {
                    self.seed_type(t, map);
                }
            }
            _ => {}
        }

        if let Some(Value::Array(options)) = map.get("anyOf") {
            for option in options {
                self.seed(option);
            }
        }
    }

    fn seed_type(&mut self, type_name: &str, map: &Map<String, Value>) {
        match type_name {
            "null" => self.null_seen = true,
            "boolean" => self.boolean_seen = true,
            "integer" => {
                self.number.get_or_insert(NumberShape { integral: true });
            }
            "number" => match &mut self.number {
                Some(shape) => shape.integral = false,
                None => self.number = Some(NumberShape { integral: false }),
            },
            "string" => {
                let shape = self.string.get_or_insert_with(StringShape::default);
                if let Some(format) = map.get("format").and_then(Value::as_str) {
                    shape.merge_format(Some(format.to_string()));
                }
            }
            "object" => {
                let shape = self.object.get_or_insert_with(ObjectShape::default);
                if let Some(properties) = map.get("properties").and_then(Value::as_object) {
                    for (key, prop) in properties {
                        shape.properties.entry(key.clone()).or_default().seed(prop);
                    }
                }
                if let Some(required) = map.get("required").and_then(Value::as_array) {
                    let keys: BTreeSet<String> = required
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect();
                    shape.required = Some(match shape.required.take() {
                        None => keys,
                        Some(existing) => existing.intersection(&keys).cloned().collect(),
                    });
                }
            }
            "array" => {
                let shape = self.array.get_or_insert_with(ArrayShape::default);
                if let Some(items) = map.get("items") {
                    if items.is_object() {
                        shape.items.get_or_insert_with(Box::default).seed(items);
                    }
                }
            }
            _ => {}
        }
    }

    /// Emit the schema for this node.
    ///
    /// Slots whose schema is a bare `{"type": X}` merge into a single type
    /// entry (a list when several). Slots with structure keep their own
    /// object. Zero entries emit `{}`, one emits that entry directly, more
    /// emit `{"anyOf": [...]}` with the type entry first.
    pub(crate) fn to_value(&self) -> Value {
        let mut bare_types: Vec<&str> = Vec::new();
        let mut structured: Vec<Value> = Vec::new();

        if self.null_seen {
            bare_types.push("null");
        }
        if self.boolean_seen {
            bare_types.push("boolean");
        }
        if let Some(number) = &self.number {
            bare_types.push(if number.integral { "integer" } else { "number" });
        }
        if let Some(string) = &self.string {
            match &string.format {
                Some(format) => structured.push(json!({ "type": "string", "format": format })),
                None => bare_types.push("string"),
            }
        }
        if let Some(object) = &self.object {
            if object.properties.is_empty() {
                bare_types.push("object");
            } else {
                let properties: Map<String, Value> = object
                    .properties
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect();
                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("object"));
                schema.insert("properties".to_string(), Value::Object(properties));
                if let Some(required) = &object.required {
                    if !required.is_empty() {
                        schema.insert("required".to_string(), json!(required));
                    }
                }
                structured.push(Value::Object(schema));
            }
        }
        if let Some(array) = &self.array {
            match &array.items {
                Some(items) => {
                    structured.push(json!({ "type": "array", "items": items.to_value() }));
                }
                None => bare_types.push("array"),
            }
        }

        let mut entries: Vec<Value> = Vec::new();
        if !bare_types.is_empty() {
            bare_types.sort_unstable();
            if bare_types.len() == 1 {
                entries.push(json!({ "type": bare_types[0] }));
            } else {
                entries.push(json!({ "type": bare_types }));
            }
        }
        entries.extend(structured);

        if entries.is_empty() {
            Value::Object(Map::new())
        } else if entries.len() == 1 {
            entries.swap_remove(0)
        } else {
            json!({ "anyOf": entries })
        }
    }
}

// Format detection

static DATETIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}").unwrap());

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Detect a string format hint, first match wins
fn detect_format(s: &str) -> Option<String> {
    if DATETIME_REGEX.is_match(s) {
        Some("date-time".to_string())
    } else if DATE_REGEX.is_match(s) {
        Some("date".to_string())
    } else if is_uri(s) {
        Some("uri".to_string())
    } else if is_email(s) {
        Some("email".to_string())
    } else if UUID_REGEX.is_match(s) {
        Some("uuid".to_string())
    } else {
        None
    }
}

fn is_uri(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn is_email(s: &str) -> bool {
    // Cheap check, good enough for a format hint
    s.contains('@') && s.contains('.') && s.len() > 5
}
