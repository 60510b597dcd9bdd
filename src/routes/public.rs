use super::{Page, RouteEntry};

/// Public Routes
///
/// Storefront pages. None of these set `requires_auth`, so the guard always
/// lets them through. The login page is the guard's redirect target and is
/// public as well.
pub fn public_routes() -> Vec<RouteEntry> {
    vec![
        // Landing page with the product catalogue.
        RouteEntry::new("/", "Home", Page::Home),
        RouteEntry::new("/products/:id", "ProductDetail", Page::ProductDetail),
        RouteEntry::new("/blogs", "BlogList", Page::BlogList),
        RouteEntry::new("/blogs/:id", "BlogDetail", Page::BlogDetail),
        RouteEntry::new(super::LOGIN_PATH, "AdminLogin", Page::AdminLogin),
    ]
}
