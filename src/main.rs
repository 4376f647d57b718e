//! Presentation shell: reads the catalog document once, builds the catalog,
//! runs a single query and renders the table. All pipeline logic lives in
//! the library; this binary only does I/O and formatting.

use clap::Parser;
use pricebook::cli::Cli;
use pricebook::error::Result;
use pricebook::search::SearchIndexEntry;
use pricebook::{Catalog, CategoryFilter, highlight};

const ANSI_MARK: &str = "\x1b[1;33m";
const ANSI_RESET: &str = "\x1b[0m";

#[tokio::main]
async fn main() -> Result<()> {
    pricebook::tracing::init();
    let cli = Cli::parse();

    // The one await point in the whole program: the initial document read.
    let catalog = match tokio::fs::read_to_string(&cli.catalog).await {
        Ok(raw) => Catalog::load(&raw),
        Err(err) => {
            tracing::warn!("cannot read {}: {err}", cli.catalog.display());
            Catalog::unavailable()
        }
    };

    if cli.list_services {
        for svc in catalog.services_present() {
            println!("{}\t{}", svc.id, svc.title);
        }
        return Ok(());
    }

    let filter = CategoryFilter::parse(&cli.service);
    let visible = catalog.index().search(&cli.query, &filter);

    render(&catalog, &visible, &cli.query, &filter);
    Ok(())
}

fn render(catalog: &Catalog, visible: &[&SearchIndexEntry], query: &str, filter: &CategoryFilter) {
    println!("{}", catalog.note());
    if let Some(updated) = catalog.updated_at() {
        println!("Última actualización: {updated}");
    }

    let filtered = !query.trim().is_empty() || *filter != CategoryFilter::All;
    let summary = catalog.summary();
    if filtered {
        println!("{} resultado(s)", visible.len());
        println!("Mostrando {} de {}", visible.len(), catalog.index().len());
    } else {
        println!(
            "{} tarifas · {} servicios",
            summary.price_entries, summary.services
        );
        println!("Mostrando {}", catalog.index().len());
    }
    println!();

    if visible.is_empty() {
        println!("No hay resultados para la búsqueda actual.");
        return;
    }

    println!(
        "{:<24} {:<28} {:>12}  {}",
        "Servicio", "Paquete/Cantidad", "Valor", "Descripción"
    );
    for entry in visible {
        let row = &entry.row;
        println!(
            "{:<24} {:<28} {:>12}  {}",
            mark_to_ansi(&highlight(&row.service_title, query)),
            mark_to_ansi(&highlight(&row.option, query)),
            mark_to_ansi(&highlight(&row.price_label, query)),
            mark_to_ansi(&highlight(&row.service_desc, query)),
        );
    }
}

/// Maps the library's `<mark>` markup to ANSI emphasis for terminals.
fn mark_to_ansi(text: &str) -> String {
    text.replace("<mark>", ANSI_MARK).replace("</mark>", ANSI_RESET)
}
