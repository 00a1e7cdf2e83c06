#[cfg(feature = "ssr")]
#[derive(Debug, clap::Parser)]
#[command(name = "blogfront", version, about = "Blog front-end with a mock REST API")]
struct Args {
    /// Config file (defaults to ./blogfront.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// JSON data file, overrides `data_path` from the config
    #[arg(long, value_name = "FILE")]
    data: Option<std::path::PathBuf>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use blogfront::api::routes::api_router;
    use blogfront::app::{shell, App};
    use blogfront::config::AppConfig;
    use blogfront::db::repository::StaticBlogRepository;
    use blogfront::state::AppState;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogfront=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting blogfront server...");

    let args = Args::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(data) = args.data {
        config.data_path = Some(data);
    }

    let data = config.load_data()?;
    tracing::info!(
        posts = data.posts.len(),
        categories = data.categories.len(),
        source = %config
            .data_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Blog data loaded"
    );
    if !config.response_delay().is_zero() {
        tracing::info!(
            delay_ms = config.response_delay_ms,
            "Simulating latency on post listings"
        );
    }

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let app_state = AppState {
        blog_repo: Arc::new(StaticBlogRepository::new(data)),
        response_delay: config.response_delay(),
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = Router::new()
        // REST API
        .nest("/api", api_router())
        // Leptos SSR routes and server functions
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static files (WASM bundle, stylesheet)
        .fallback_service(ServeDir::new(&site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
