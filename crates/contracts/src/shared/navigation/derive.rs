//! NavigationTree → RouteTable derivation
//!
//! Two forms of the same depth-first copy:
//! - typed: `derive_routes` over `NavigationEntry<V>`
//! - dynamic: `strip_presentation` over a JSON document of the same shape,
//!   where a malformed `children` value is passed through untouched.

use super::types::{NavigationEntry, RouteEntry};
use serde_json::{Map, Value};

/// Keys that exist only for the menu and never reach the router.
pub const PRESENTATION_KEYS: &[&str] = &["icon"];

/// Projects the navigation tree onto the route table.
///
/// Ordering and nesting are preserved exactly; an empty `children` list stays
/// an empty list.
pub fn derive_routes<V: Clone>(entries: &[NavigationEntry<V>]) -> Vec<RouteEntry<V>> {
    entries.iter().map(RouteEntry::from).collect()
}

impl<V: Clone> From<&NavigationEntry<V>> for RouteEntry<V> {
    fn from(entry: &NavigationEntry<V>) -> Self {
        RouteEntry {
            path: entry.path.clone(),
            name: entry.name.clone(),
            component: entry.component.clone(),
            redirect: entry.redirect.clone(),
            children: entry.children.as_deref().map(derive_routes),
        }
    }
}

/// JSON form of `derive_routes`.
///
/// A non-array input is returned as-is. Inside the array every object node
/// loses its presentation keys; `children` is recursed into only when it is an
/// array, anything else under that key is copied unchanged.
pub fn strip_presentation(tree: &Value) -> Value {
    match tree {
        Value::Array(nodes) => Value::Array(nodes.iter().map(strip_node).collect()),
        other => other.clone(),
    }
}

fn strip_node(node: &Value) -> Value {
    let Value::Object(fields) = node else {
        return node.clone();
    };

    let mut copy = Map::with_capacity(fields.len());
    for (key, value) in fields {
        if PRESENTATION_KEYS.contains(&key.as_str()) {
            continue;
        }
        let value = if key == "children" && value.is_array() {
            strip_presentation(value)
        } else {
            value.clone()
        };
        copy.insert(key.clone(), value);
    }
    Value::Object(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Vec<NavigationEntry<&'static str>> {
        vec![
            NavigationEntry::page("/", "Home", "house", "home"),
            NavigationEntry::section(
                "/product",
                "Product",
                "box",
                vec![
                    NavigationEntry::page(
                        "/product/product-information",
                        "Product information",
                        "postcard",
                        "product_information",
                    ),
                    NavigationEntry::page(
                        "/product/product-batch",
                        "Product batch",
                        "takeaway-box",
                        "product_batch",
                    ),
                ],
            )
            .with_redirect("/product/product-information"),
            NavigationEntry::section("/empty", "Empty", "box", vec![]),
        ]
    }

    fn has_icon_json(value: &Value) -> bool {
        match value {
            Value::Object(fields) => {
                fields.contains_key("icon") || fields.values().any(has_icon_json)
            }
            Value::Array(items) => items.iter().any(has_icon_json),
            _ => false,
        }
    }

    #[test]
    fn test_derive_preserves_shape_and_fields() {
        let tree = sample_tree();
        let routes = derive_routes(&tree);

        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0].path, "/");
        assert_eq!(routes[0].name, "Home");
        assert_eq!(routes[0].component, Some("home"));
        assert!(routes[0].children.is_none());

        let product = &routes[1];
        assert_eq!(product.redirect.as_deref(), Some("/product/product-information"));
        assert_eq!(product.component, None);
        let children = product.child_entries();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "Product information");
        assert_eq!(children[1].path, "/product/product-batch");
        assert_eq!(children[1].component, Some("product_batch"));
    }

    #[test]
    fn test_empty_children_stay_empty() {
        let routes = derive_routes(&sample_tree());
        assert_eq!(routes[2].children, Some(vec![]));
    }

    #[test]
    fn test_serialized_routes_have_no_icon() {
        let routes = derive_routes(&sample_tree());
        let value = serde_json::to_value(&routes).unwrap();
        assert!(!has_icon_json(&value));

        let source = serde_json::to_value(sample_tree()).unwrap();
        assert!(has_icon_json(&source));
    }

    #[test]
    fn test_derive_is_idempotent_once_icons_are_gone() {
        let routes = derive_routes(&sample_tree());
        let lifted: Vec<_> = routes.iter().map(RouteEntry::to_navigation).collect();
        assert_eq!(derive_routes(&lifted), routes);
    }

    #[test]
    fn test_source_tree_is_not_mutated() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = derive_routes(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_strip_presentation_json() {
        let tree = json!([
            {"path": "/", "name": "Home", "icon": "house", "component": "home"},
            {
                "path": "/product",
                "name": "Product",
                "icon": "box",
                "redirect": "/product/product-information",
                "children": [
                    {"path": "/product/product-information", "name": "Product information",
                     "icon": "postcard", "component": "product_information"}
                ]
            }
        ]);

        let stripped = strip_presentation(&tree);
        assert_eq!(
            stripped,
            json!([
                {"path": "/", "name": "Home", "component": "home"},
                {
                    "path": "/product",
                    "name": "Product",
                    "redirect": "/product/product-information",
                    "children": [
                        {"path": "/product/product-information", "name": "Product information",
                         "component": "product_information"}
                    ]
                }
            ])
        );
        assert_eq!(strip_presentation(&stripped), stripped);
    }

    #[test]
    fn test_malformed_children_pass_through() {
        let tree = json!([
            {"path": "/odd", "name": "Odd", "icon": "box",
             "children": {"icon": "kept", "path": "/odd/x"}}
        ]);
        let stripped = strip_presentation(&tree);
        assert_eq!(
            stripped,
            json!([
                {"path": "/odd", "name": "Odd", "children": {"icon": "kept", "path": "/odd/x"}}
            ])
        );
    }

    #[test]
    fn test_non_array_input_passes_through() {
        let value = json!({"path": "/", "icon": "house"});
        assert_eq!(strip_presentation(&value), value);
        assert_eq!(strip_presentation(&Value::Null), Value::Null);
    }

    #[test]
    fn test_json_matches_typed_derivation() {
        let tree = sample_tree();
        let from_json = strip_presentation(&serde_json::to_value(&tree).unwrap());
        let typed = serde_json::to_value(derive_routes(&tree)).unwrap();
        assert_eq!(from_json, typed);
    }
}
