//! salonpage: render the salon landing page from its content document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use salonpage::render::Target;
use salonpage::source::FileSource;
use salonpage::{config, template, AppState, SiteError};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "salonpage")]
#[command(about = "Render the salon landing page from its content document", long_about = None)]
struct Args {
    /// Content document (defaults to `content_path` from salonpage.toml)
    #[arg(value_name = "PATH")]
    content: Option<PathBuf>,

    /// Print a JSON object of target id to rendered HTML instead of the page
    #[arg(long)]
    json: bool,

    /// Inject content without Markdown conversion
    #[arg(long)]
    no_markdown: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SiteError> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if args.no_markdown {
        cfg.markdown = false;
    }
    let path = args
        .content
        .unwrap_or_else(|| PathBuf::from(&cfg.content_path));

    let mut app = AppState::new(template::storefront(), &cfg);
    app.boot();
    let output = app.hydrate(&FileSource::new(&path));

    if args.json {
        let mut targets = Map::new();
        for target in output.map(|o| o.rendered).unwrap_or_else(|| vec![Target::Faq]) {
            if let Some(element) = target.locate(&app.page) {
                targets.insert(
                    target.key().to_string(),
                    Value::String(app.page.inner_html(element)),
                );
            }
        }
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        print!("{}", app.page.to_html());
    }

    Ok(())
}
