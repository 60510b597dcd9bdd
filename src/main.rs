use anyhow::Context;
use clap::{Parser, Subcommand};
use flowershop_admin::{
    ApiClient, AppConfig, Endpoint, FilePart, FileSessionStore, Navigation, SessionMarker,
    SessionStore, config::Env, create_router, images,
};
use std::{path::Path, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// administration client for the flower shop backend
#[derive(Debug, Parser)]
struct AppCli {
    #[command(subcommand)]
    cmd: AppCmd,
}

#[derive(Debug, Subcommand)]
enum AppCmd {
    /// prints every endpoint with its method and resolved URL
    Endpoints {
        /// identifier substituted into templates that take one
        #[arg(long, default_value_t = 1)]
        id: i64,
        /// keyword used for the blog search endpoint
        #[arg(long, default_value = "roses")]
        keyword: String,
    },
    /// prints the client route table
    Routes,
    /// resolves a location and runs the navigation guard against it
    Navigate { location: String },
    /// stores a session marker (any non-null JSON value)
    Login { marker: String },
    /// removes the stored session marker
    Logout,
    /// uploads an additional product image
    UploadProductImage { product_id: String, file: String },
    /// uploads a blog image
    UploadBlogImage {
        blog_id: String,
        file: String,
        #[arg(long)]
        token: String,
        /// replace the cover image instead of adding to the gallery
        #[arg(long)]
        main: bool,
    },
    /// deletes blog images: one by id, the cover image, or the whole gallery
    DeleteBlogImage {
        blog_id: String,
        #[arg(long, conflicts_with_all = ["main", "all"], required_unless_present_any = ["main", "all"])]
        image_id: Option<String>,
        #[arg(long, conflicts_with = "all")]
        main: bool,
        #[arg(long)]
        all: bool,
        #[arg(long)]
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    // 1. Configuration & Environment Loading
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // RUST_LOG wins; otherwise debug output for this crate only.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "flowershop_admin=debug,reqwest=info".into());

    // 3. Log format follows the environment: pretty locally, JSON in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
    }

    tracing::debug!(base_url = %config.base_url, env = ?config.env, "configuration loaded");

    let args = AppCli::parse();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?
        .block_on(run(config, args))
}

async fn run(config: AppConfig, args: AppCli) -> anyhow::Result<()> {
    let session = Arc::new(FileSessionStore::new(config.session_file.clone()));
    let client = ApiClient::with_reqwest(&config);

    match args.cmd {
        AppCmd::Endpoints { id, keyword } => {
            for endpoint in Endpoint::catalogue(id, &keyword) {
                println!(
                    "{:<12} {:<22} {:<7} {}",
                    endpoint.resource(),
                    endpoint.operation(),
                    endpoint.method().as_str(),
                    endpoint.url(&client.endpoints)
                );
            }
        }
        AppCmd::Routes => {
            let router = create_router(session)?;
            for route in router.table().entries() {
                let access = if route.requires_auth { "protected" } else { "public" };
                println!("{:<18} {:<24} {}", route.path, route.name, access);
            }
        }
        AppCmd::Navigate { location } => {
            let router = create_router(session)?;
            match router.navigate(&location) {
                Navigation::Proceed(matched) => {
                    println!("proceed -> {:?} {:?}", matched.route.page, matched.params);
                }
                Navigation::Redirect(target) => println!("redirect -> {}", target),
                Navigation::NotFound => println!("no route matches {}", location),
            }
        }
        AppCmd::Login { marker } => {
            let value: serde_json::Value =
                serde_json::from_str(&marker).context("session marker must be valid JSON")?;
            let marker = SessionMarker::new(value)
                .ok_or_else(|| anyhow::anyhow!("session marker must not be null"))?;
            session.set(marker)?;
        }
        AppCmd::Logout => session.clear()?,
        AppCmd::UploadProductImage { product_id, file } => {
            let file = read_file(&file).await?;
            let url = images::upload_product_image(&client, product_id, file).await?;
            println!("{}", url);
        }
        AppCmd::UploadBlogImage {
            blog_id,
            file,
            token,
            main,
        } => {
            let file = read_file(&file).await?;
            let url = if main {
                images::upload_main_blog_image(&client, blog_id, file, &token).await?
            } else {
                images::upload_blog_image(&client, blog_id, file, &token).await?
            };
            println!("{}", url);
        }
        AppCmd::DeleteBlogImage {
            blog_id,
            image_id,
            main,
            all,
            token,
        } => {
            if all {
                images::delete_all_blog_images(&client, blog_id, &token).await?;
            } else if main {
                images::delete_main_blog_image(&client, blog_id, &token).await?;
            } else if let Some(image_id) = image_id {
                images::delete_blog_image(&client, blog_id, image_id, &token).await?;
            }
        }
    }

    Ok(())
}

/// Loads an image from disk, guessing the MIME type from the extension.
async fn read_file(path: &str) -> anyhow::Result<FilePart> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path))?;

    let path = Path::new(path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    let content_type = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("gif") => Some("image/gif"),
        Some("webp") => Some("image/webp"),
        _ => None,
    };

    let file = FilePart::new(file_name, bytes);
    Ok(match content_type {
        Some(content_type) => file.with_content_type(content_type),
        None => file,
    })
}
