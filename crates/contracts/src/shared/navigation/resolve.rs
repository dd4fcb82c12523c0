//! Path → route lookup over the derived route table.

use super::types::RouteEntry;

/// Upper bound on redirect hops before a lookup gives up.
pub const MAX_REDIRECT_HOPS: usize = 8;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a, V> {
    /// Path of the entry that renders, after redirects
    pub path: String,
    pub entry: &'a RouteEntry<V>,
    pub component: &'a V,
}

/// Normalizes a browser path: drops query/fragment, ensures a leading slash
/// and removes trailing slashes (except for the root).
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Depth-first search for the entry whose path equals `path`.
pub fn find_route<'a, V>(routes: &'a [RouteEntry<V>], path: &str) -> Option<&'a RouteEntry<V>> {
    let target = normalize_path(path);
    find_normalized(routes, &target)
}

fn find_normalized<'a, V>(routes: &'a [RouteEntry<V>], target: &str) -> Option<&'a RouteEntry<V>> {
    for route in routes {
        if normalize_path(&route.path) == target {
            return Some(route);
        }
        if let Some(found) = find_normalized(route.child_entries(), target) {
            return Some(found);
        }
    }
    None
}

/// Resolves `path` to the component that should render.
///
/// A redirect on the matched entry takes precedence over its component.
/// Unknown paths, entries without a target and redirect cycles yield `None`.
pub fn resolve_route<'a, V>(routes: &'a [RouteEntry<V>], path: &str) -> Option<ResolvedRoute<'a, V>> {
    let mut current = normalize_path(path);

    for _ in 0..=MAX_REDIRECT_HOPS {
        let entry = find_normalized(routes, &current)?;
        if let Some(target) = entry.redirect.as_deref() {
            current = normalize_path(target);
            continue;
        }
        return entry.component.as_ref().map(|component| ResolvedRoute {
            path: current,
            entry,
            component,
        });
    }

    log::warn!("redirect chain from '{}' exceeded {} hops", path, MAX_REDIRECT_HOPS);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(path: &str, component: &'static str) -> RouteEntry<&'static str> {
        RouteEntry {
            path: path.to_string(),
            name: path.to_string(),
            component: Some(component),
            redirect: None,
            children: None,
        }
    }

    fn redirect(path: &str, target: &str) -> RouteEntry<&'static str> {
        RouteEntry {
            path: path.to_string(),
            name: path.to_string(),
            component: None,
            redirect: Some(target.to_string()),
            children: None,
        }
    }

    fn routes() -> Vec<RouteEntry<&'static str>> {
        let mut product = redirect("/product", "/product/product-information");
        product.children = Some(vec![
            leaf("/product/product-information", "information"),
            leaf("/product/product-batch", "batch"),
        ]);
        vec![leaf("/", "home"), leaf("/staff", "staff"), product]
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/staff/"), "/staff");
        assert_eq!(normalize_path("staff"), "/staff");
        assert_eq!(normalize_path("/staff?page=2#top"), "/staff");
    }

    #[test]
    fn test_resolve_direct_and_nested() {
        let routes = routes();
        let home = resolve_route(&routes, "/").unwrap();
        assert_eq!(*home.component, "home");

        let batch = resolve_route(&routes, "/product/product-batch/").unwrap();
        assert_eq!(*batch.component, "batch");
        assert_eq!(batch.path, "/product/product-batch");
    }

    #[test]
    fn test_resolve_follows_redirect() {
        let routes = routes();
        let resolved = resolve_route(&routes, "/product").unwrap();
        assert_eq!(*resolved.component, "information");
        assert_eq!(resolved.path, "/product/product-information");
        assert_eq!(resolved.entry.name, "/product/product-information");
    }

    #[test]
    fn test_unknown_path() {
        assert!(resolve_route(&routes(), "/nowhere").is_none());
        assert!(find_route(&routes(), "/nowhere").is_none());
    }

    #[test]
    fn test_redirect_cycle_gives_up() {
        let routes = vec![redirect("/a", "/b"), redirect("/b", "/a")];
        assert!(resolve_route(&routes, "/a").is_none());
    }
}
