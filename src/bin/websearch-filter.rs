//! Command-line harness for the web search filter.
//!
//! Reads one JSON body, runs it through the filter as a request or a response,
//! and prints the resulting body.  Diagnostics go to stderr via `tracing`.
//!
//! # Usage
//!
//! ```bash
//! # Add web search to a request body
//! websearch-filter request.json
//!
//! # Report web search cost for a response read from stdin
//! websearch-filter --stage response < response.json
//!
//! # Use a YAML configuration and override the search cap
//! websearch-filter --config filter.yaml --max-searches 10 request.json
//! ```

use std::io::Read;

use arrrg::CommandLine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use websearch_filter::{FilterArgs, FilterConfig, WebSearchFilter};

/// Which hook the input body is fed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stage {
    /// The body is an outgoing request.
    #[default]
    Request,
    /// The body is an upstream response.
    Response,
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "request" | "inlet" => Ok(Stage::Request),
            "response" | "outlet" => Ok(Stage::Response),
            _ => Err(format!(
                "Invalid stage: {}. Valid options: request, response",
                s
            )),
        }
    }
}

fn read_body(path: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("could not read {path}: {err}").into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "websearch_filter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (args, files) = FilterArgs::from_command_line_relaxed("websearch-filter [OPTIONS] [FILE]");
    if files.len() > 1 {
        eprintln!("Error: at most one body file may be given");
        std::process::exit(1);
    }

    let stage = match &args.stage {
        Some(stage) => stage.parse::<Stage>()?,
        None => Stage::default(),
    };
    let config = FilterConfig::from_args(&args)?;
    tracing::debug!(?config, ?stage, "websearch-filter starting");
    let filter = WebSearchFilter::new(config)?;

    let raw = read_body(files.first().map(String::as_str))?;
    let body: serde_json::Value = serde_json::from_str(&raw)?;
    let body = match stage {
        Stage::Request => filter.annotate_request_json(body, None)?,
        Stage::Response => filter.annotate_response_json(body, None),
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
