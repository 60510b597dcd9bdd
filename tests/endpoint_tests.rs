use flowershop_admin::{AppConfig, Endpoint, Endpoints};
use reqwest::Method;
use std::collections::HashSet;

fn registry(base: &str) -> Endpoints {
    Endpoints::new(&AppConfig::new(base).unwrap())
}

#[test]
fn test_product_endpoints() {
    let api = registry("http://x/api");
    let products = api.products();

    assert_eq!(products.get_all(), "http://x/api/products");
    assert_eq!(products.create(), "http://x/api/products");
    assert_eq!(products.get_by_id(5), "http://x/api/products/5");
    assert_eq!(products.update(5), "http://x/api/products/5");
    assert_eq!(products.delete(5), "http://x/api/products/5");
    assert_eq!(
        products.upload_product_image(5),
        "http://x/api/products/5/images"
    );
}

#[test]
fn test_category_and_collection_endpoints() {
    let api = registry("http://x/api");

    let categories = api.categories();
    assert_eq!(categories.get_all(), "http://x/api/categories");
    assert_eq!(categories.create(), "http://x/api/categories");
    assert_eq!(categories.get_by_id(3), "http://x/api/categories/3");
    assert_eq!(categories.update(3), "http://x/api/categories/3");
    assert_eq!(categories.delete(3), "http://x/api/categories/3");
    assert_eq!(
        categories.get_products(3),
        "http://x/api/categories/3/products"
    );

    let collections = api.collections();
    assert_eq!(collections.get_all(), "http://x/api/collections");
    assert_eq!(collections.create(), "http://x/api/collections");
    assert_eq!(collections.get_by_id(9), "http://x/api/collections/9");
    assert_eq!(collections.update(9), "http://x/api/collections/9");
    assert_eq!(collections.delete(9), "http://x/api/collections/9");
    assert_eq!(
        collections.get_products(9),
        "http://x/api/collections/9/products"
    );
}

#[test]
fn test_admin_login_endpoint() {
    assert_eq!(
        registry("http://x/api").admin().login(),
        "http://x/api/admins/login"
    );
}

#[test]
fn test_blog_endpoints() {
    let api = registry("http://x/api");
    let blogs = api.blogs();

    assert_eq!(blogs.get_all(), "http://x/api/blogs");
    assert_eq!(blogs.get_by_id(2), "http://x/api/blogs/2");
    assert_eq!(blogs.get_all_admin(), "http://x/api/admin/blogs");
    assert_eq!(blogs.create(), "http://x/api/admin/blogs");
    assert_eq!(blogs.update(2), "http://x/api/admin/blogs/2");
    assert_eq!(blogs.delete(2), "http://x/api/admin/blogs/2");
    assert_eq!(blogs.publish(2), "http://x/api/admin/blogs/2/publish");
    assert_eq!(blogs.unpublish(2), "http://x/api/admin/blogs/2/unpublish");
    assert_eq!(
        blogs.get_by_author(11),
        "http://x/api/admin/blogs/author/11"
    );
    assert_eq!(
        blogs.upload_main_image(2),
        "http://x/api/admin/blogs/2/images/main"
    );
    assert_eq!(blogs.upload_image(2), "http://x/api/admin/blogs/2/images");
    assert_eq!(
        blogs.delete_main_image(2),
        "http://x/api/admin/blogs/2/images/main"
    );
    assert_eq!(
        blogs.delete_image(2, 40),
        "http://x/api/admin/blogs/2/images/40"
    );
    assert_eq!(
        blogs.delete_all_images(2),
        "http://x/api/admin/blogs/2/images"
    );
}

#[test]
fn test_search_keyword_is_percent_encoded() {
    let api = registry("http://x/api");

    assert_eq!(api.blogs().search("a b"), "http://x/api/blogs?search=a%20b");
    assert_eq!(
        api.blogs().search("tulip&rose=1"),
        "http://x/api/blogs?search=tulip%26rose%3D1"
    );
    assert_eq!(api.blogs().search(""), "http://x/api/blogs?search=");
}

#[test]
fn test_identifiers_are_substituted_verbatim() {
    let api = registry("http://x/api");

    // No validation and no encoding of path identifiers.
    assert_eq!(api.products().get_by_id("abc"), "http://x/api/products/abc");
    assert_eq!(api.products().get_by_id("a b"), "http://x/api/products/a b");
    assert_eq!(api.blogs().get_by_id(-1), "http://x/api/blogs/-1");
}

#[test]
fn test_base_url_is_used_as_given() {
    let api = registry("https://shop.example.com/api/");
    assert_eq!(
        api.products().get_all(),
        "https://shop.example.com/api//products"
    );
    assert_eq!(api.base_url(), "https://shop.example.com/api/");
}

#[test]
fn test_every_descriptor_is_base_plus_template() {
    let api = registry("http://x/api");

    for endpoint in Endpoint::catalogue(7, "a b") {
        let url = endpoint.url(&api);
        assert!(
            url.starts_with("http://x/api/"),
            "{:?} produced {}",
            endpoint,
            url
        );
    }
}

#[test]
fn test_descriptor_names_are_unique() {
    let catalogue = Endpoint::catalogue(1, "x");
    let names: HashSet<(&str, &str)> = catalogue
        .iter()
        .map(|endpoint| (endpoint.resource(), endpoint.operation()))
        .collect();

    assert_eq!(names.len(), catalogue.len());
}

#[test]
fn test_descriptor_methods() {
    let api = registry("http://x/api");

    assert_eq!(Endpoint::ProductsGetAll.method(), Method::GET);
    assert_eq!(Endpoint::ProductsCreate.method(), Method::POST);
    assert_eq!(Endpoint::CategoriesUpdate(1).method(), Method::PUT);
    assert_eq!(Endpoint::BlogsPublish(1).method(), Method::PATCH);
    assert_eq!(Endpoint::BlogsDeleteImage(1, 2).method(), Method::DELETE);
    assert_eq!(Endpoint::AdminLogin.method(), Method::POST);

    assert_eq!(
        Endpoint::BlogsSearch("a b".to_string()).url(&api),
        "http://x/api/blogs?search=a%20b"
    );
    assert_eq!(
        Endpoint::BlogsDeleteImage(4, 8).url(&api),
        "http://x/api/admin/blogs/4/images/8"
    );
}
