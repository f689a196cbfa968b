//! Context output formatter

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json, print_yaml, use_color};
use crate::cli::OutputFormat;
use crate::context::Context;
use crate::error::Result;

/// Marker shown next to the current context
const ACTIVE_INDICATOR: &str = "*";

/// Serializable context for structured output (JSON/YAML)
#[derive(Serialize, Debug, PartialEq)]
struct SerializableContext {
    name: String,
    address: String,
    current: bool,
}

fn rows(contexts: &[Context], current: &str) -> Vec<SerializableContext> {
    contexts
        .iter()
        .map(|ctx| SerializableContext {
            name: ctx.name.clone(),
            address: ctx.address.clone(),
            current: ctx.name == current,
        })
        .collect()
}

/// Output contexts in the specified format
pub fn output_contexts(contexts: &[Context], current: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if contexts.is_empty() {
                println!("No contexts configured.");
                return Ok(());
            }
            println!("{}", build_table(contexts, current, use_color()));
            Ok(())
        }
        OutputFormat::Csv => {
            print!("{}", render_csv(contexts, current));
            Ok(())
        }
        OutputFormat::Json => print_json(&rows(contexts, current)),
        OutputFormat::Yaml => print_yaml(&rows(contexts, current)),
    }
}

fn build_table(contexts: &[Context], current: &str, color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["CURRENT", "NAME", "ADDRESS"]);

    for ctx in contexts {
        let is_current = ctx.name == current;
        let marker = if is_current { ACTIVE_INDICATOR } else { "" };
        let mut cells = vec![
            Cell::new(marker),
            Cell::new(&ctx.name),
            Cell::new(&ctx.address),
        ];
        if is_current && color {
            cells = cells.into_iter().map(|c| c.fg(Color::Green)).collect();
        }
        table.add_row(cells);
    }

    table
}

fn render_csv(contexts: &[Context], current: &str) -> String {
    let mut out = String::from("current,name,address\n");
    for ctx in contexts {
        out.push_str(&format!(
            "{},{},{}\n",
            ctx.name == current,
            escape_csv(&ctx.name),
            escape_csv(&ctx.address)
        ));
    }
    out
}

/// Print details for a single context
pub fn output_context_details(ctx: &Context, has_token: bool) {
    print!("{}", render_details(ctx, has_token));
}

fn render_details(ctx: &Context, has_token: bool) -> String {
    format!(
        "Context \"{}\"\n  Address:      {}\n  Token stored: {}\n",
        ctx.name,
        ctx.address,
        if has_token { "yes" } else { "no" }
    )
}
