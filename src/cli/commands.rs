use crate::demo;
use crate::request::RawRequest;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use http::Method;
use std::str::FromStr;

/// Command-line interface for Routebind
///
/// Provides commands for inspecting the demo route table and resolving
/// requests against it.
#[derive(Parser)]
#[command(name = "routebind")]
#[command(about = "Routebind CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the demo route table
    Routes,
    /// Match and resolve a request against the demo routes
    Resolve {
        /// HTTP method
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request target, query string included (e.g. "/items/3?q=x")
        #[arg(short, long)]
        url: String,

        /// JSON request body
        #[arg(short, long)]
        body: Option<String>,
    },
}

/// Execute a parsed CLI invocation.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Routes => cmd_routes(),
        Commands::Resolve { method, url, body } => cmd_resolve(&method, &url, body),
    }
}

fn cmd_routes() -> anyhow::Result<()> {
    let (router, _dispatcher) = demo::build();
    router.dump_routes();
    Ok(())
}

fn cmd_resolve(method: &str, url: &str, body: Option<String>) -> anyhow::Result<()> {
    let method = Method::from_str(&method.to_ascii_uppercase())
        .with_context(|| format!("invalid HTTP method: {method}"))?;

    let mut request = RawRequest::new(method.clone(), url);
    if let Some(body) = body {
        request = request.with_body(body);
    }

    let (router, dispatcher) = demo::build();

    let Some(route_match) = router.route(method.clone(), &request.path) else {
        bail!("no route matched {method} {}", request.path);
    };

    let Some(response) = dispatcher.dispatch(route_match, &request) else {
        bail!("no handler registered for {method} {}", request.path);
    };

    println!("status: {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}
