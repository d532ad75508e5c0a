use crate::config::{Config, OutputFormat, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_common::{load_document, RealFileSystem};
use pagecraft_document::ComponentCatalog;
use pagecraft_validator::{Severity, ValidationIssue, ValidationReport, Validator};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document .json file or directory of documents
    pub input: PathBuf,

    /// Output format (defaults to the config file's, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Validate only the component with this id (its children are not checked)
    #[arg(short, long)]
    pub component: Option<String>,

    /// Fail on warnings too
    #[arg(long)]
    pub strict: bool,
}

/// Result for one document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    report: ValidationReport,
}

#[derive(Debug, Default)]
struct Totals {
    files: usize,
    failed_files: usize,
    errors: usize,
    warnings: usize,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let format = args.format.unwrap_or(config.format);
    let catalog = config.catalog();
    let validator = Validator::new(config.validation_options(args.strict));

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_documents(&args.input)
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    if format == OutputFormat::Text {
        println!("🔍 {} Pagecraft Validator", "Starting".green().bold());
        println!("   Input: {}", args.input.display());
        if args.input.is_dir() {
            println!("   Found {} documents", files.len());
        }
        println!();
    }

    let mut totals = Totals::default();
    let mut reports = Vec::new();

    for file in &files {
        totals.files += 1;

        let report = match validate_file(file, &catalog, &validator, args.component.as_deref()) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("{} {}: {}", "✗".red(), file.display(), err);
                totals.failed_files += 1;
                continue;
            }
        };

        totals.errors += report.errors.len();
        totals.warnings += report.warnings.len();

        match format {
            OutputFormat::Json => reports.push(FileReport {
                path: file.clone(),
                report,
            }),
            OutputFormat::Text => print_report(file, &report),
        }
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => print_totals(&totals),
    }

    if totals.errors > 0 || totals.failed_files > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn validate_file(
    path: &Path,
    catalog: &ComponentCatalog,
    validator: &Validator,
    component: Option<&str>,
) -> Result<ValidationReport> {
    let root = load_document(&RealFileSystem, path, catalog)?;

    match component {
        Some(id) => {
            let node = root
                .as_ref()
                .and_then(|root| root.find(id))
                .ok_or_else(|| anyhow::anyhow!("Component '{}' not found", id))?;
            Ok(validator.validate_node(node))
        }
        None => Ok(validator.validate_tree(root.as_ref())),
    }
}

fn print_report(path: &Path, report: &ValidationReport) {
    let status = if !report.is_valid {
        "✗".red()
    } else if report.has_warnings() {
        "!".yellow()
    } else {
        "✓".green()
    };
    println!("{} {} ({})", status, path.display(), report.summary());

    for issue in report.errors.iter().chain(&report.warnings) {
        print_issue(issue);
    }

    if report.issue_count() > 0 {
        println!();
    }
}

fn print_issue(issue: &ValidationIssue) {
    let level = match issue.severity {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };
    let value = if issue.value.is_empty() {
        "(empty)".to_string()
    } else {
        format!("{:?}", issue.value)
    };

    println!(
        "  {} {}#{} > {}: {}",
        level, issue.component_type, issue.component_id, issue.field_label, issue.message
    );
    println!(
        "    {} field {} = {}",
        "→".dimmed(),
        issue.field_name.dimmed(),
        value.dimmed()
    );
}

fn print_totals(totals: &Totals) {
    println!();
    println!(
        "✨ {} Validation complete!",
        if totals.errors > 0 || totals.failed_files > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Documents checked: {}", totals.files);

    if totals.failed_files > 0 {
        println!("   {} {}", "Unreadable:".red(), totals.failed_files);
    }
    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }
    if totals.errors == 0 && totals.warnings == 0 && totals.failed_files == 0 {
        println!("   {} All validations passed!", "✓".green());
    }
}

/// All `.json` documents under `dir`, sorted, excluding the config file
fn find_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && path.extension().map(|e| e == "json").unwrap_or(false)
                && path.file_name().map(|n| n != DEFAULT_CONFIG_NAME).unwrap_or(false)
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_validator::ValidationOptions;
    use std::fs;

    #[test]
    fn test_find_documents_skips_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{}").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.json"), "[]").unwrap();

        let names: Vec<String> = find_documents(dir.path())
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "nested/c.json"]);
    }

    #[test]
    fn test_validate_file_whole_tree_and_single_component() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(
            &path,
            r#"{
                "id": "root",
                "type": "link",
                "attributes": { "href": "/ok" },
                "components": [{ "id": "bad", "type": "link", "attributes": { "href": "no good" } }]
            }"#,
        )
        .unwrap();

        let catalog = ComponentCatalog::builtin();
        let validator = Validator::new(ValidationOptions::default());

        let report = validate_file(&path, &catalog, &validator, None).unwrap();
        assert_eq!(report.errors.len(), 1);

        let report = validate_file(&path, &catalog, &validator, Some("root")).unwrap();
        assert!(report.is_valid);

        let report = validate_file(&path, &catalog, &validator, Some("bad")).unwrap();
        assert!(!report.is_valid);

        assert!(validate_file(&path, &catalog, &validator, Some("ghost")).is_err());
    }

    #[test]
    fn test_validate_file_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let catalog = ComponentCatalog::builtin();
        let validator = Validator::default();
        assert!(validate_file(&path, &catalog, &validator, None).is_err());
    }

    #[test]
    fn test_file_report_json_shape() {
        let report = FileReport {
            path: PathBuf::from("page.json"),
            report: ValidationReport::empty(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["path"], "page.json");
        assert_eq!(json["isValid"], true);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }
}
