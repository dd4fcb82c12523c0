//! Navigation tree and route table types
//!
//! `NavigationEntry` is the authored superset that drives the sidebar menu.
//! `RouteEntry` is its routing projection: the same node without presentation
//! fields.

use serde::{Deserialize, Serialize};

// ============================================================================
// Navigation tree (menu + routing)
// ============================================================================

/// One node of the hierarchical section declaration.
///
/// `V` is the view handle the router hands back to the renderer
/// (an enum of pages in the frontend, a plain string in JSON documents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry<V> {
    pub path: String,
    pub name: String,
    /// Icon key, UI-layer only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationEntry<V>>>,
}

impl<V> NavigationEntry<V> {
    /// Leaf section rendered by `component`.
    pub fn page(
        path: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        component: V,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            icon: Some(icon.into()),
            component: Some(component),
            redirect: None,
            children: None,
        }
    }

    /// Section grouping sub-sections.
    pub fn section(
        path: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<NavigationEntry<V>>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            icon: Some(icon.into()),
            component: None,
            redirect: None,
            children: Some(children),
        }
    }

    /// Default navigation target when the entry itself is visited.
    pub fn with_redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Sub-sections, empty for leaves.
    pub fn child_entries(&self) -> &[NavigationEntry<V>] {
        self.children.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Route table (routing projection)
// ============================================================================

/// Routing-only projection of a `NavigationEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry<V> {
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteEntry<V>>>,
}

impl<V> RouteEntry<V> {
    pub fn child_entries(&self) -> &[RouteEntry<V>] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl<V: Clone> RouteEntry<V> {
    /// Lifts a route back into a navigation entry without an icon.
    pub fn to_navigation(&self) -> NavigationEntry<V> {
        NavigationEntry {
            path: self.path.clone(),
            name: self.name.clone(),
            icon: None,
            component: self.component.clone(),
            redirect: self.redirect.clone(),
            children: self
                .children
                .as_ref()
                .map(|children| children.iter().map(RouteEntry::to_navigation).collect()),
        }
    }
}
