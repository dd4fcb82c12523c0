//! Navigation tree: the single authored declaration of application sections
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::navigation::{derive_routes, resolve_route, NavigationEntry};
//!
//! let pages = vec![
//!     NavigationEntry::page("/", "Home", "house", "home"),
//!     NavigationEntry::page("/staff", "Staff", "user", "staff"),
//! ];
//!
//! // The sidebar renders `pages`, the router works on the projection
//! let routes = derive_routes(&pages);
//! let resolved = resolve_route(&routes, "/staff/").unwrap();
//! assert_eq!(*resolved.component, "staff");
//! ```

mod derive;
mod resolve;
mod types;
mod validation;

pub use derive::{derive_routes, strip_presentation, PRESENTATION_KEYS};
pub use resolve::{find_route, normalize_path, resolve_route, ResolvedRoute, MAX_REDIRECT_HOPS};
pub use types::{NavigationEntry, RouteEntry};
pub use validation::{validate_tree, NavigationError, MAX_DEPTH};
