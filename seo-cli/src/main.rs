//! SEO CLI
//!
//! Renders the title and meta tags of JSON content documents.

mod document;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use seo_cache::MemoryExtractorCache;
use seo_core::{SeoConfigValues, SeoContent, SeoExtractor};
use seo_extractors::{ExtrasExtractor, KeywordsExtractor, OriginalRouteExtractor, RouteTable};
use seo_presentation::{CatalogTranslator, RedirectResponse, SeoPage, SeoPresentation};

use crate::document::ContentDocument;

/// SEO - page title and meta tag rendering
#[derive(Parser)]
#[command(name = "seo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the SEO page state of content documents
    Render {
        /// Content document(s) (JSON)
        #[arg(short, long, required = true, num_args = 1..)]
        content: Vec<PathBuf>,
        /// Configuration file (JSON); falls back to SEO_* environment variables
        #[arg(long, env = "SEO_CONFIG")]
        config: Option<PathBuf>,
        /// Message catalog (JSON: domain -> id -> message)
        #[arg(short, long)]
        messages: Option<PathBuf>,
        /// Route pattern used for original routes, as name=pattern
        #[arg(short, long = "route", value_parser = parse_route)]
        routes: Vec<(String, String)>,
        /// Base URL for generated route URLs
        #[arg(long)]
        base_url: Option<Url>,
        /// Resolve extractors on every document instead of caching them
        #[arg(long)]
        no_cache: bool,
    },

    /// Print the effective configuration
    Config {
        /// Configuration file (JSON); falls back to SEO_* environment variables
        #[arg(long, env = "SEO_CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "seo=debug,info"
    } else {
        "seo=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render {
            content,
            config,
            messages,
            routes,
            base_url,
            no_cache,
        } => cmd_render(
            &content,
            config.as_deref(),
            messages.as_deref(),
            routes,
            base_url,
            no_cache,
        ),
        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

fn parse_route(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, pattern)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), pattern.trim().to_string()))
        }
        _ => Err(format!("expected name=pattern, got '{arg}'")),
    }
}

fn load_config(path: Option<&Path>) -> Result<SeoConfigValues> {
    match path {
        Some(path) => SeoConfigValues::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => SeoConfigValues::from_env().context("Invalid SEO_* environment"),
    }
}

/// Page state printed for one rendered document.
#[derive(Serialize)]
struct RenderedDocument<'a> {
    source: String,
    content_type: &'a str,
    page: &'a SeoPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<&'a RedirectResponse>,
}

fn build_presentation(
    config: SeoConfigValues,
    translator: CatalogTranslator,
    routes: RouteTable,
    cache: Option<Arc<MemoryExtractorCache>>,
) -> SeoPresentation<SeoPage, CatalogTranslator> {
    let mut presentation =
        SeoPresentation::new(SeoPage::new(), translator, config).with_default_extractors();
    if let Some(cache) = cache {
        presentation = presentation.with_cache(cache);
    }

    let registered: [(Arc<dyn SeoExtractor>, i32); 3] = [
        (Arc::new(OriginalRouteExtractor::new(Arc::new(routes))), 10),
        (Arc::new(KeywordsExtractor), 0),
        (Arc::new(ExtrasExtractor), 0),
    ];
    for (extractor, priority) in registered {
        presentation.register_extractor(extractor, priority);
    }
    presentation
}

fn cmd_render(
    paths: &[PathBuf],
    config_path: Option<&Path>,
    messages_path: Option<&Path>,
    routes: Vec<(String, String)>,
    base_url: Option<Url>,
    no_cache: bool,
) -> Result<()> {
    let config = load_config(config_path)?;

    let translator = match messages_path {
        Some(path) => CatalogTranslator::from_json_file(path)
            .with_context(|| format!("Failed to load messages {}", path.display()))?,
        None => CatalogTranslator::new(),
    };

    let mut table = RouteTable::new();
    for (name, pattern) in routes {
        table = table.with_route(name, pattern);
    }
    if let Some(base_url) = base_url {
        table = table.with_base_url(base_url);
    }

    let cache = Arc::new(MemoryExtractorCache::new());
    let mut presentation =
        build_presentation(config, translator, table, (!no_cache).then(|| cache.clone()));

    let mut rendered = Vec::with_capacity(paths.len());
    for path in paths {
        let document = ContentDocument::from_json_file(path)?;
        debug!(path = %path.display(), content_type = document.content_type(), "Rendering document");
        *presentation.page_mut() = SeoPage::new();
        presentation
            .update_seo_page(&document)
            .with_context(|| format!("Failed to render {}", path.display()))?;

        let state = RenderedDocument {
            source: path.display().to_string(),
            content_type: document.content_type(),
            page: presentation.page(),
            redirect: presentation.redirect_response(),
        };
        rendered.push(serde_json::to_value(&state)?);
    }

    let output = if rendered.len() == 1 {
        rendered.remove(0)
    } else {
        serde_json::Value::Array(rendered)
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    eprintln!(
        "{} {}",
        "✓".green().bold(),
        format!("Rendered {} document(s)", paths.len()).green()
    );
    if !no_cache {
        let stats = cache.stats();
        eprintln!(
            "  {} {} hit(s), {} miss(es), {} cached content type(s)",
            "Extractor cache:".dimmed(),
            stats.hits,
            stats.misses,
            stats.total_entries
        );
    }

    Ok(())
}

fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    eprintln!("{}", "⚙️  Effective SEO configuration".cyan().bold());
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_route() {
        assert_eq!(
            parse_route("article_show=/articles/{slug}").unwrap(),
            ("article_show".to_string(), "/articles/{slug}".to_string())
        );
        assert!(parse_route("/articles/{slug}").is_err());
        assert!(parse_route("=/x").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "%content_title% | Site", "original_url_behaviour": "redirect"}}"#)
            .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.default_title(), Some("%content_title% | Site"));
        assert_eq!(config.original_url_behaviour, seo_core::OriginalUrlBehaviour::Redirect);
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "seo",
            "render",
            "--content",
            "a.json",
            "b.json",
            "--route",
            "show=/items/{id}",
            "--no-cache",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                content,
                routes,
                no_cache,
                ..
            } => {
                assert_eq!(content.len(), 2);
                assert_eq!(routes, vec![("show".to_string(), "/items/{id}".to_string())]);
                assert!(no_cache);
            }
            Commands::Config { .. } => panic!("expected render"),
        }
    }

    #[test]
    fn test_config_path_from_env() {
        std::env::set_var("SEO_CONFIG", "/etc/seo/config.json");
        let cli = Cli::try_parse_from(["seo", "config"]).unwrap();
        std::env::remove_var("SEO_CONFIG");

        match cli.command {
            Commands::Config { config } => {
                assert_eq!(config, Some(PathBuf::from("/etc/seo/config.json")));
            }
            Commands::Render { .. } => panic!("expected config"),
        }
    }

    #[test]
    fn test_render_document_with_blank_original_url() {
        let document: ContentDocument =
            serde_json::from_str(r#"{"title": "Hello", "original_url": ""}"#).unwrap();
        let mut presentation = build_presentation(
            SeoConfigValues::new(),
            CatalogTranslator::new(),
            RouteTable::new(),
            Some(Arc::new(MemoryExtractorCache::new())),
        );

        presentation.update_seo_page(&document).unwrap();

        assert_eq!(presentation.page().title(), "Hello");
        assert_eq!(presentation.page().meta_count(), 0);
    }

    #[test]
    fn test_render_document_with_canonical_route() {
        let document: ContentDocument = serde_json::from_str(
            r#"{"title": "Launch", "original_route": {"name": "news_show", "parameters": {"slug": "launch day"}}}"#,
        )
        .unwrap();
        let mut presentation = build_presentation(
            SeoConfigValues::new(),
            CatalogTranslator::new(),
            RouteTable::new().with_route("news_show", "/news/{slug}"),
            None,
        );

        presentation.update_seo_page(&document).unwrap();

        assert_eq!(
            presentation.page().meta(seo_core::PropertyType::Property, "og:url"),
            Some("/news/launch%20day")
        );
    }
}
