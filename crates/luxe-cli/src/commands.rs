use colored::Colorize;

use luxe_server::{LuxeServer, ServerConfig};
use luxe_store::sample_catalog;
use luxe_types::{categories, filter_by_category, stock_label, CategoryFilter, FurnitureItem};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Catalog(args) => cmd_catalog(args, &cli.format),
    }
}

/// File config (or defaults) with command-line overrides applied.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.no_seed {
        config.seed_catalog = false;
    }
    if args.no_cors {
        config.allow_cors = false;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    println!(
        "{} Luxe catalog on {} ({})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        if config.seed_catalog {
            "sample catalog"
        } else {
            "empty catalog"
        },
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "could not listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };
        LuxeServer::new(config).serve_with_shutdown(shutdown).await
    })?;
    Ok(())
}

fn cmd_catalog(args: CatalogArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let items = sample_catalog();
    let filter = args
        .category
        .as_deref()
        .map(CategoryFilter::from_label)
        .unwrap_or_default();
    let shown = filter_by_category(&items, &filter);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
        OutputFormat::Text => print!("{}", render_text(&items, &filter, &shown)),
    }
    Ok(())
}

fn render_text(
    all: &[FurnitureItem],
    filter: &CategoryFilter,
    shown: &[&FurnitureItem],
) -> String {
    let chips: Vec<String> = categories(all)
        .into_iter()
        .map(|c| {
            if c == filter.to_string() {
                format!("[{}]", c.bold())
            } else {
                c
            }
        })
        .collect();
    let mut out = format!("{}\n\n", chips.join("  "));

    if shown.is_empty() {
        out.push_str("No furniture found in this category.\n");
        return out;
    }
    for item in shown {
        let stock = if item.in_stock {
            stock_label(item).green()
        } else {
            stock_label(item).red()
        };
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            item.name.bold(),
            format!("${}", item.price).yellow(),
            item.category.cyan(),
            stock,
        ));
        out.push_str(&format!("    {}\n", item.description.dimmed()));
    }
    out
}
