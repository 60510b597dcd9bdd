use super::{Page, RouteEntry};

/// Admin Routes
///
/// Back-office pages. Each one is `protected()`, so navigating to it without a
/// session marker is redirected to the login page.
pub fn admin_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/admin/dashboard", "AdminDashboard", Page::AdminDashboard).protected(),
        RouteEntry::new(
            "/admin/products",
            "AdminProductManagement",
            Page::AdminProductManagement,
        )
        .protected(),
    ]
}
