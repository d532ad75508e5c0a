use crate::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_document::FieldDescriptor;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn catalog(args: CatalogArgs, cwd: &Path) -> Result<()> {
    let catalog = Config::load(cwd)?.catalog();

    if args.format == OutputFormat::Json {
        let types: BTreeMap<&str, &[FieldDescriptor]> = catalog.types().collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    for (type_name, fields) in catalog.types() {
        println!("{}", type_name.bold());
        if fields.is_empty() {
            println!("  {}", "(no fields)".dimmed());
        }
        for field in fields {
            println!("  {}", describe_field(field));
        }
        println!();
    }

    Ok(())
}

fn describe_field(field: &FieldDescriptor) -> String {
    let mut line = format!("{} ({}) \"{}\"", field.name, field.kind, field.label);

    if field.required {
        line.push_str(" required");
    }
    if field.min.is_some() || field.max.is_some() {
        let bound = |b: Option<f64>| b.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string());
        line.push_str(&format!(" [{}..{}]", bound(field.min), bound(field.max)));
    }
    if !field.options.is_empty() {
        let ids: Vec<String> = field
            .options
            .iter()
            .map(|option| format!("{:?}", option.id))
            .collect();
        line.push_str(&format!(" options: {}", ids.join(", ")));
    }

    line
}
