//! Nav Trail CLI - inspect navigation for a path
//!
//! Loads the route table and breadcrumb map, then prints the breadcrumb
//! trail, display hints, and availability metadata for a path.
//!
//! Usage:
//!     nav-trail /library/components/button
//!     nav-trail --routes config/routes.json /careers
//!     nav-trail --json /dashboard/settings

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use leximius_nav::{
    BreadcrumbDisplay, BreadcrumbEngine, BreadcrumbMap, LinkTarget, RouteRegistry, RouteResolver,
};

#[derive(Parser, Debug)]
#[command(name = "nav-trail")]
#[command(about = "Inspect the navigation trail and route metadata for a path")]
#[command(version)]
struct Args {
    /// The path to inspect (e.g., /library/components/button)
    path: String,

    /// Path to the route table JSON (default: looks for config/routes.json)
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Path to a breadcrumb map JSON (default: the builtin site map)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Output as JSON instead of rendered text
    #[arg(long)]
    json: bool,

    /// Verbose output (show debug info)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if args.verbose { "debug" } else { "warn" }.into()
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = match load_registry(&args.routes) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading route table: {}", e);
            std::process::exit(1);
        }
    };
    debug!(routes = registry.len(), "route table loaded");

    if let Err(warnings) = registry.validate_strict() {
        for warning in &warnings {
            tracing::warn!("route table: {}", warning);
        }
    }

    let map = match &args.map {
        Some(path) => match BreadcrumbMap::from_file(path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error loading breadcrumb map: {}", e);
                std::process::exit(1);
            }
        },
        None => BreadcrumbMap::builtin(),
    };
    debug!(entries = map.len(), "breadcrumb map loaded");

    let resolver = RouteResolver::new(registry);
    let engine = BreadcrumbEngine::new(map);

    let trail = engine.trail(&args.path);
    let display = BreadcrumbDisplay::for_path(&args.path);
    let target = LinkTarget::resolve(&args.path, &resolver);
    let coming_soon = resolver.coming_soon_info(&args.path);

    if args.json {
        let out = serde_json::json!({
            "path": args.path,
            "trail": trail,
            "display": display,
            "available": resolver.is_route_available(&args.path),
            "href": target.href(),
            "coming_soon": coming_soon,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    let rendered: Vec<String> = trail
        .iter()
        .map(|item| {
            if item.current {
                item.label.clone()
            } else {
                format!("{} ({})", item.label, item.href.as_deref().unwrap_or("-"))
            }
        })
        .collect();
    println!("Trail:     {}", rendered.join(" > "));
    println!(
        "Display:   style={:?} variant={:?} animated={}",
        display.style, display.variant, display.animated
    );
    println!("Available: {}", resolver.is_route_available(&args.path));
    println!("Href:      {}", target.href());

    if let Some(info) = coming_soon {
        println!(
            "Coming soon: {} ({})",
            info.title,
            info.expected_date.as_deref().unwrap_or("date TBD")
        );
        if let Some(description) = info.description {
            println!("  {}", description);
        }
    }
}

fn load_registry(path: &Option<PathBuf>) -> leximius_nav::Result<RouteRegistry> {
    if let Some(p) = path {
        return RouteRegistry::from_file(p);
    }

    // Try default locations relative to the working directory
    let default_paths = [
        PathBuf::from("config/routes.json"),
        PathBuf::from("../config/routes.json"),
        PathBuf::from("../../config/routes.json"),
    ];
    for candidate in &default_paths {
        if candidate.exists() {
            return RouteRegistry::from_file(candidate);
        }
    }

    Err(leximius_nav::NavError::ConfigLoadError {
        path: "config/routes.json".to_string(),
        reason: "not found in default locations; pass --routes".to_string(),
    })
}
