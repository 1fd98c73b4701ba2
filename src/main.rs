//! filedeck - a self-contained web file manager
//!
//! # Usage
//! ```bash
//! filedeck /path/to/files        # Serve the directory
//! filedeck /path/to/files --open # Serve and open browser
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filedeck::routes;
use filedeck::storage::FileStore;

/// filedeck - Manage a directory of folders and files in your browser
#[derive(Parser)]
#[command(name = "filedeck")]
#[command(about = "A self-contained web file manager", long_about = None)]
struct Cli {
    /// Path to the directory to manage
    #[arg(value_name = "ROOT_DIR")]
    root: PathBuf,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,

    /// Port to run the server on
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (quieter for production)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the managed root
    let store = match FileStore::open(&cli.root) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("✗ Failed to open root directory: {}", e);
            eprintln!("  Path: {}", cli.root.display());
            std::process::exit(1);
        }
    };

    let root_path = store.resolver().root().to_path_buf();
    let shared_store = Arc::new(store);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router: JSON API plus the managed files themselves,
    // served under /uploads so descriptor URLs dereference.
    let app = Router::new()
        .merge(routes::create_router(shared_store))
        .nest_service("/uploads", ServeDir::new(&root_path))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Bind to the port
    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", cli.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    // Print startup message
    let url = format!("http://127.0.0.1:{}", cli.port);
    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │                  filedeck                   │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Root:   {}", root_path.display());
    println!("  Server: {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    // Open browser if requested
    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
