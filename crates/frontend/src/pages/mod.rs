//! Application sections
//!
//! `navigation_tree` is the one authored declaration; the sidebar renders it
//! as-is and the router works on `ROUTES`, its icon-free projection.

pub mod columns;
pub mod registry;

use contracts::shared::navigation::{
    derive_routes, normalize_path, resolve_route, NavigationEntry, RouteEntry,
};
use once_cell::sync::Lazy;

/// View handle carried by navigation and route entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Staff,
    ProductInformation,
    ProductBatch,
    Supplier,
    GoodsReceipt,
    GoodsReturn,
}

impl Page {
    /// DOM id prefix, also used by the page registry.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Staff => "staff",
            Self::ProductInformation => "product_information",
            Self::ProductBatch => "product_batch",
            Self::Supplier => "supplier",
            Self::GoodsReceipt => "goods_receipt",
            Self::GoodsReturn => "goods_return",
        }
    }

    /// REST resource behind the page, relative to the backend URL.
    pub fn api(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Staff => Some("/staff"),
            Self::ProductInformation => Some("/product-information"),
            Self::ProductBatch => Some("/product-batch"),
            Self::Supplier => Some("/supplier"),
            Self::GoodsReceipt => Some("/goods-receipt"),
            Self::GoodsReturn => Some("/goods-return"),
        }
    }
}

pub fn navigation_tree() -> Vec<NavigationEntry<Page>> {
    vec![
        NavigationEntry::page("/", "Home", "house", Page::Home),
        NavigationEntry::page("/staff", "Staff", "user", Page::Staff),
        NavigationEntry::section(
            "/product",
            "Product",
            "box",
            vec![
                NavigationEntry::page(
                    "/product/product-information",
                    "Product information",
                    "postcard",
                    Page::ProductInformation,
                ),
                NavigationEntry::page(
                    "/product/product-batch",
                    "Product batch",
                    "takeaway-box",
                    Page::ProductBatch,
                ),
            ],
        )
        .with_redirect("/product/product-information"),
        NavigationEntry::page("/supplier", "Supplier", "office-building", Page::Supplier),
        NavigationEntry::page("/goods-receipt", "Goods receipt", "sold-out", Page::GoodsReceipt),
        NavigationEntry::page("/goods-return", "Goods return", "sold-out", Page::GoodsReturn),
    ]
}

/// Route table derived once from the navigation tree.
pub static ROUTES: Lazy<Vec<RouteEntry<Page>>> = Lazy::new(|| derive_routes(&navigation_tree()));

/// Path the browser should show for `path`: redirects followed, unknown
/// paths only normalized.
pub fn canonical_path(path: &str) -> String {
    resolve_route(ROUTES.as_slice(), path)
        .map(|resolved| resolved.path)
        .unwrap_or_else(|| normalize_path(path))
}
