use reqwest::Method;
use std::fmt::Display;

use crate::{
    ApiClient,
    error::ApiError,
    transport::{FilePart, HttpRequest, HttpResponse},
};

// --- Shared request flow ---

/// Sends one request and turns any non-2xx status into `failure`.
async fn execute(
    client: &ApiClient,
    request: HttpRequest,
    failure: &'static str,
) -> Result<HttpResponse, ApiError> {
    let response = client.http.send(request).await?;

    if !response.is_success() {
        return Err(ApiError::RequestFailed(failure));
    }

    Ok(response)
}

/// POSTs `file` as multipart field `file` and returns the body text as-is.
async fn upload(
    client: &ApiClient,
    url: String,
    file: FilePart,
    token: Option<&str>,
    failure: &'static str,
) -> Result<String, ApiError> {
    let mut request = HttpRequest::new(Method::POST, url).file(file);
    if let Some(token) = token {
        request = request.bearer(token);
    }

    let response = execute(client, request, failure).await?;
    Ok(response.body)
}

async fn delete(
    client: &ApiClient,
    url: String,
    token: Option<&str>,
    failure: &'static str,
) -> Result<(), ApiError> {
    let mut request = HttpRequest::new(Method::DELETE, url);
    if let Some(token) = token {
        request = request.bearer(token);
    }

    execute(client, request, failure).await?;
    Ok(())
}

// --- Product images ---

/// upload_product_image
///
/// Adds an image to a product's gallery. Unauthenticated. Returns the stored
/// image URL the backend answers with.
pub async fn upload_product_image(
    client: &ApiClient,
    product_id: impl Display,
    file: FilePart,
) -> Result<String, ApiError> {
    let url = client.endpoints.products().upload_product_image(product_id);
    upload(client, url, file, None, "Failed to upload product image").await
}

// --- Blog images ---

/// upload_main_blog_image
///
/// Replaces the blog post's cover image. Returns the stored image URL.
pub async fn upload_main_blog_image(
    client: &ApiClient,
    blog_id: impl Display,
    file: FilePart,
    token: &str,
) -> Result<String, ApiError> {
    let url = client.endpoints.blogs().upload_main_image(blog_id);
    let request = HttpRequest::new(Method::POST, url).file(file).bearer(token);

    let response = execute(client, request, "Failed to upload main blog image").await?;
    tracing::debug!(status = response.status, "main blog image upload response");
    Ok(response.body)
}

/// upload_blog_image
///
/// Adds an image to the blog post's gallery. Returns the stored image URL.
pub async fn upload_blog_image(
    client: &ApiClient,
    blog_id: impl Display,
    file: FilePart,
    token: &str,
) -> Result<String, ApiError> {
    let url = client.endpoints.blogs().upload_image(blog_id);
    upload(client, url, file, Some(token), "Failed to upload blog image").await
}

pub async fn delete_main_blog_image(
    client: &ApiClient,
    blog_id: impl Display,
    token: &str,
) -> Result<(), ApiError> {
    let url = client.endpoints.blogs().delete_main_image(blog_id);
    delete(client, url, Some(token), "Failed to delete main blog image").await
}

pub async fn delete_blog_image(
    client: &ApiClient,
    blog_id: impl Display,
    image_id: impl Display,
    token: &str,
) -> Result<(), ApiError> {
    let url = client.endpoints.blogs().delete_image(blog_id, image_id);
    delete(client, url, Some(token), "Failed to delete blog image").await
}

/// delete_all_blog_images
///
/// Clears the gallery. The cover image is managed separately and stays.
pub async fn delete_all_blog_images(
    client: &ApiClient,
    blog_id: impl Display,
    token: &str,
) -> Result<(), ApiError> {
    let url = client.endpoints.blogs().delete_all_images(blog_id);
    delete(client, url, Some(token), "Failed to delete all blog images").await
}
