use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use std::fmt::Display;

use crate::config::AppConfig;

/// Characters escaped in query values. Everything except the unreserved
/// set `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single query parameter value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Endpoints
///
/// The endpoint registry. Holds only the base URL; every builder below is a
/// pure string concatenation and performs no validation of identifiers.
#[derive(Clone, Debug)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products(&self) -> Products<'_> {
        Products { base: &self.base_url }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { base: &self.base_url }
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections { base: &self.base_url }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { base: &self.base_url }
    }

    pub fn blogs(&self) -> Blogs<'_> {
        Blogs { base: &self.base_url }
    }
}

// --- Products ---

#[derive(Clone, Copy)]
pub struct Products<'a> {
    base: &'a str,
}

impl Products<'_> {
    pub fn get_all(&self) -> String {
        format!("{}/products", self.base)
    }

    pub fn get_by_id(&self, id: impl Display) -> String {
        format!("{}/products/{}", self.base, id)
    }

    pub fn create(&self) -> String {
        self.get_all()
    }

    pub fn update(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }

    pub fn delete(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }

    pub fn upload_product_image(&self, id: impl Display) -> String {
        format!("{}/products/{}/images", self.base, id)
    }
}

// --- Categories ---

#[derive(Clone, Copy)]
pub struct Categories<'a> {
    base: &'a str,
}

impl Categories<'_> {
    pub fn get_all(&self) -> String {
        format!("{}/categories", self.base)
    }

    pub fn get_by_id(&self, id: impl Display) -> String {
        format!("{}/categories/{}", self.base, id)
    }

    pub fn get_products(&self, id: impl Display) -> String {
        format!("{}/categories/{}/products", self.base, id)
    }

    pub fn create(&self) -> String {
        self.get_all()
    }

    pub fn update(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }

    pub fn delete(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }
}

// --- Collections ---

#[derive(Clone, Copy)]
pub struct Collections<'a> {
    base: &'a str,
}

impl Collections<'_> {
    pub fn get_all(&self) -> String {
        format!("{}/collections", self.base)
    }

    pub fn get_by_id(&self, id: impl Display) -> String {
        format!("{}/collections/{}", self.base, id)
    }

    pub fn get_products(&self, id: impl Display) -> String {
        format!("{}/collections/{}/products", self.base, id)
    }

    pub fn create(&self) -> String {
        self.get_all()
    }

    pub fn update(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }

    pub fn delete(&self, id: impl Display) -> String {
        self.get_by_id(id)
    }
}

// --- Admin ---

#[derive(Clone, Copy)]
pub struct Admin<'a> {
    base: &'a str,
}

impl Admin<'_> {
    pub fn login(&self) -> String {
        format!("{}/admins/login", self.base)
    }
}

// --- Blogs ---

/// Blogs
///
/// Public reads live under `/blogs`; everything that mutates a post, including
/// its images, lives under `/admin/blogs`.
#[derive(Clone, Copy)]
pub struct Blogs<'a> {
    base: &'a str,
}

impl Blogs<'_> {
    pub fn get_all(&self) -> String {
        format!("{}/blogs", self.base)
    }

    pub fn get_by_id(&self, id: impl Display) -> String {
        format!("{}/blogs/{}", self.base, id)
    }

    pub fn search(&self, keyword: &str) -> String {
        format!("{}/blogs?search={}", self.base, encode_query_value(keyword))
    }

    pub fn get_all_admin(&self) -> String {
        format!("{}/admin/blogs", self.base)
    }

    pub fn create(&self) -> String {
        self.get_all_admin()
    }

    pub fn update(&self, id: impl Display) -> String {
        format!("{}/admin/blogs/{}", self.base, id)
    }

    pub fn delete(&self, id: impl Display) -> String {
        self.update(id)
    }

    pub fn publish(&self, id: impl Display) -> String {
        format!("{}/admin/blogs/{}/publish", self.base, id)
    }

    pub fn unpublish(&self, id: impl Display) -> String {
        format!("{}/admin/blogs/{}/unpublish", self.base, id)
    }

    pub fn get_by_author(&self, author_id: impl Display) -> String {
        format!("{}/admin/blogs/author/{}", self.base, author_id)
    }

    pub fn upload_main_image(&self, id: impl Display) -> String {
        format!("{}/admin/blogs/{}/images/main", self.base, id)
    }

    pub fn upload_image(&self, id: impl Display) -> String {
        format!("{}/admin/blogs/{}/images", self.base, id)
    }

    pub fn delete_main_image(&self, id: impl Display) -> String {
        self.upload_main_image(id)
    }

    pub fn delete_image(&self, id: impl Display, image_id: impl Display) -> String {
        format!("{}/admin/blogs/{}/images/{}", self.base, id, image_id)
    }

    pub fn delete_all_images(&self, id: impl Display) -> String {
        self.upload_image(id)
    }
}

// --- Endpoint descriptors ---

/// Endpoint
///
/// One `(resource, operation)` pair of the registry, carrying whatever
/// identifiers the URL template needs. Lets callers enumerate the catalogue
/// together with the HTTP verb the backend expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    ProductsGetAll,
    ProductsGetById(i64),
    ProductsCreate,
    ProductsUpdate(i64),
    ProductsDelete(i64),
    ProductsUploadImage(i64),
    CategoriesGetAll,
    CategoriesGetById(i64),
    CategoriesGetProducts(i64),
    CategoriesCreate,
    CategoriesUpdate(i64),
    CategoriesDelete(i64),
    CollectionsGetAll,
    CollectionsGetById(i64),
    CollectionsGetProducts(i64),
    CollectionsCreate,
    CollectionsUpdate(i64),
    CollectionsDelete(i64),
    AdminLogin,
    BlogsGetAll,
    BlogsGetById(i64),
    BlogsSearch(String),
    BlogsGetAllAdmin,
    BlogsCreate,
    BlogsUpdate(i64),
    BlogsDelete(i64),
    BlogsPublish(i64),
    BlogsUnpublish(i64),
    BlogsGetByAuthor(i64),
    BlogsUploadMainImage(i64),
    BlogsUploadImage(i64),
    BlogsDeleteMainImage(i64),
    BlogsDeleteImage(i64, i64),
    BlogsDeleteAllImages(i64),
}

impl Endpoint {
    /// Resource name as it appears in the registry.
    pub fn resource(&self) -> &'static str {
        use Endpoint::*;
        match self {
            ProductsGetAll | ProductsGetById(_) | ProductsCreate | ProductsUpdate(_)
            | ProductsDelete(_) | ProductsUploadImage(_) => "products",
            CategoriesGetAll | CategoriesGetById(_) | CategoriesGetProducts(_)
            | CategoriesCreate | CategoriesUpdate(_) | CategoriesDelete(_) => "categories",
            CollectionsGetAll | CollectionsGetById(_) | CollectionsGetProducts(_)
            | CollectionsCreate | CollectionsUpdate(_) | CollectionsDelete(_) => "collections",
            AdminLogin => "admin",
            _ => "blogs",
        }
    }

    /// Operation name within the resource.
    pub fn operation(&self) -> &'static str {
        use Endpoint::*;
        match self {
            ProductsGetAll | CategoriesGetAll | CollectionsGetAll | BlogsGetAll => "get_all",
            ProductsGetById(_) | CategoriesGetById(_) | CollectionsGetById(_)
            | BlogsGetById(_) => "get_by_id",
            ProductsCreate | CategoriesCreate | CollectionsCreate | BlogsCreate => "create",
            ProductsUpdate(_) | CategoriesUpdate(_) | CollectionsUpdate(_) | BlogsUpdate(_) => {
                "update"
            }
            ProductsDelete(_) | CategoriesDelete(_) | CollectionsDelete(_) | BlogsDelete(_) => {
                "delete"
            }
            ProductsUploadImage(_) => "upload_product_image",
            CategoriesGetProducts(_) | CollectionsGetProducts(_) => "get_products",
            AdminLogin => "login",
            BlogsSearch(_) => "search",
            BlogsGetAllAdmin => "get_all_admin",
            BlogsPublish(_) => "publish",
            BlogsUnpublish(_) => "unpublish",
            BlogsGetByAuthor(_) => "get_by_author",
            BlogsUploadMainImage(_) => "upload_main_image",
            BlogsUploadImage(_) => "upload_image",
            BlogsDeleteMainImage(_) => "delete_main_image",
            BlogsDeleteImage(..) => "delete_image",
            BlogsDeleteAllImages(_) => "delete_all_images",
        }
    }

    /// HTTP verb the backend routes this endpoint under.
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            ProductsCreate | ProductsUploadImage(_) | CategoriesCreate | CollectionsCreate
            | AdminLogin | BlogsCreate | BlogsUploadMainImage(_) | BlogsUploadImage(_) => {
                Method::POST
            }
            ProductsUpdate(_) | CategoriesUpdate(_) | CollectionsUpdate(_) | BlogsUpdate(_) => {
                Method::PUT
            }
            BlogsPublish(_) | BlogsUnpublish(_) => Method::PATCH,
            ProductsDelete(_) | CategoriesDelete(_) | CollectionsDelete(_) | BlogsDelete(_)
            | BlogsDeleteMainImage(_) | BlogsDeleteImage(..) | BlogsDeleteAllImages(_) => {
                Method::DELETE
            }
            _ => Method::GET,
        }
    }

    /// Builds the URL through the registry.
    pub fn url(&self, endpoints: &Endpoints) -> String {
        use Endpoint::*;
        let products = endpoints.products();
        let categories = endpoints.categories();
        let collections = endpoints.collections();
        let blogs = endpoints.blogs();

        match self {
            ProductsGetAll => products.get_all(),
            ProductsGetById(id) => products.get_by_id(id),
            ProductsCreate => products.create(),
            ProductsUpdate(id) => products.update(id),
            ProductsDelete(id) => products.delete(id),
            ProductsUploadImage(id) => products.upload_product_image(id),
            CategoriesGetAll => categories.get_all(),
            CategoriesGetById(id) => categories.get_by_id(id),
            CategoriesGetProducts(id) => categories.get_products(id),
            CategoriesCreate => categories.create(),
            CategoriesUpdate(id) => categories.update(id),
            CategoriesDelete(id) => categories.delete(id),
            CollectionsGetAll => collections.get_all(),
            CollectionsGetById(id) => collections.get_by_id(id),
            CollectionsGetProducts(id) => collections.get_products(id),
            CollectionsCreate => collections.create(),
            CollectionsUpdate(id) => collections.update(id),
            CollectionsDelete(id) => collections.delete(id),
            AdminLogin => endpoints.admin().login(),
            BlogsGetAll => blogs.get_all(),
            BlogsGetById(id) => blogs.get_by_id(id),
            BlogsSearch(keyword) => blogs.search(keyword),
            BlogsGetAllAdmin => blogs.get_all_admin(),
            BlogsCreate => blogs.create(),
            BlogsUpdate(id) => blogs.update(id),
            BlogsDelete(id) => blogs.delete(id),
            BlogsPublish(id) => blogs.publish(id),
            BlogsUnpublish(id) => blogs.unpublish(id),
            BlogsGetByAuthor(author_id) => blogs.get_by_author(author_id),
            BlogsUploadMainImage(id) => blogs.upload_main_image(id),
            BlogsUploadImage(id) => blogs.upload_image(id),
            BlogsDeleteMainImage(id) => blogs.delete_main_image(id),
            BlogsDeleteImage(id, image_id) => blogs.delete_image(id, image_id),
            BlogsDeleteAllImages(id) => blogs.delete_all_images(id),
        }
    }

    /// Every descriptor, with `id` (and `id + 1` for secondary identifiers)
    /// and `keyword` filled in. Used for listing the catalogue.
    pub fn catalogue(id: i64, keyword: &str) -> Vec<Endpoint> {
        use Endpoint::*;
        vec![
            ProductsGetAll,
            ProductsGetById(id),
            ProductsCreate,
            ProductsUpdate(id),
            ProductsDelete(id),
            ProductsUploadImage(id),
            CategoriesGetAll,
            CategoriesGetById(id),
            CategoriesGetProducts(id),
            CategoriesCreate,
            CategoriesUpdate(id),
            CategoriesDelete(id),
            CollectionsGetAll,
            CollectionsGetById(id),
            CollectionsGetProducts(id),
            CollectionsCreate,
            CollectionsUpdate(id),
            CollectionsDelete(id),
            AdminLogin,
            BlogsGetAll,
            BlogsGetById(id),
            BlogsSearch(keyword.to_string()),
            BlogsGetAllAdmin,
            BlogsCreate,
            BlogsUpdate(id),
            BlogsDelete(id),
            BlogsPublish(id),
            BlogsUnpublish(id),
            BlogsGetByAuthor(id),
            BlogsUploadMainImage(id),
            BlogsUploadImage(id),
            BlogsDeleteMainImage(id),
            BlogsDeleteImage(id, id + 1),
            BlogsDeleteAllImages(id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_value_matches_uri_component_encoding() {
        assert_eq!(encode_query_value("a b"), "a%20b");
        assert_eq!(encode_query_value("roses & lilies"), "roses%20%26%20lilies");
        assert_eq!(encode_query_value("a+b=c?d/e#f"), "a%2Bb%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_query_value("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_query_value("hoa sen"), "hoa%20sen");
        assert_eq!(encode_query_value("hoa hồng"), "hoa%20h%E1%BB%93ng");
        assert_eq!(encode_query_value(""), "");
    }
}
