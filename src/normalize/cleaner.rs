//! OpenAPI 3.0 schema cleanup

use serde_json::{Map, Value};

/// Union keywords whose members are themselves schemas
const UNION_KEYWORDS: &[&str] = &["anyOf", "oneOf", "allOf"];

/// Rewrite a raw inferred schema into an OpenAPI-3.0-legal schema.
///
/// Applied recursively to the whole tree. At each object node, in order:
/// drop the `$schema` marker, filter trivial object placeholders out of
/// `anyOf`, collapse the union when zero or one alternatives survive, then
/// recurse into every nested schema position. Only `anyOf` is filtered;
/// `oneOf`/`allOf` members are normalized but never removed.
///
/// Non-object input (boolean `items`, boolean `additionalProperties`)
/// passes through unchanged.
pub fn normalize(schema: Value) -> Value {
    let mut map = match schema {
        Value::Object(map) => map,
        other => return other,
    };

    map.remove("$schema");

    if matches!(map.get("anyOf"), Some(Value::Array(_))) {
        if let Some(Value::Array(options)) = map.remove("anyOf") {
            let kept: Vec<Value> = options
                .into_iter()
                .filter(|option| !is_trivial_object(option))
                .collect();
            apply_filtered_union(&mut map, kept);
        }
    }

    if let Some(Value::Object(properties)) = map.get_mut("properties") {
        for value in properties.values_mut() {
            *value = normalize(value.take());
        }
    }

    if let Some(items) = map.get_mut("items") {
        match items {
            Value::Object(_) => *items = normalize(items.take()),
            Value::Array(elements) => {
                for element in elements {
                    *element = normalize(element.take());
                }
            }
            _ => {}
        }
    }

    if let Some(additional) = map.get_mut("additionalProperties") {
        if additional.is_object() {
            *additional = normalize(additional.take());
        }
    }

    for keyword in UNION_KEYWORDS {
        if let Some(Value::Array(options)) = map.get_mut(*keyword) {
            for option in options {
                *option = normalize(option.take());
            }
        }
    }

    Value::Object(map)
}

/// Put the filtered `anyOf` alternatives back onto the node.
///
/// Zero survivors degrade the node to a generic object; one survivor is
/// spliced into the node without overwriting keys already present (a
/// description attached at this level wins over the alternative's); two or
/// more keep the union.
fn apply_filtered_union(map: &mut Map<String, Value>, mut kept: Vec<Value>) {
    match kept.len() {
        0 => {
            map.insert("type".to_string(), Value::String("object".to_string()));
        }
        1 => match kept.swap_remove(0) {
            Value::Object(single) => {
                for (key, value) in single {
                    map.entry(key).or_insert(value);
                }
            }
            other => {
                map.insert("anyOf".to_string(), Value::Array(vec![other]));
            }
        },
        _ => {
            map.insert("anyOf".to_string(), Value::Array(kept));
        }
    }
}

/// A schema fragment asserting only "this was an object", with no field
/// information
fn is_trivial_object(option: &Value) -> bool {
    match option.as_object() {
        Some(map) => map.len() == 1 && map.get("type").and_then(Value::as_str) == Some("object"),
        None => false,
    }
}
