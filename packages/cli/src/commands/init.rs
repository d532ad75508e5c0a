use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

const EXAMPLE_DOCUMENT: &str = "example.page.json";

const EXAMPLE_CONTENT: &str = r#"{
  "type": "wrapper",
  "components": [
    {
      "type": "image",
      "attributes": { "id": "hero-image", "src": "/images/hero.png", "alt": "" }
    },
    {
      "type": "link",
      "attributes": { "id": "cta", "href": "https://example.com/signup", "target": "_blank" }
    },
    {
      "type": "text",
      "attributes": { "id": "greeting" },
      "traits": [{ "name": "data-bind", "label": "Data Source", "type": "data-binding" }]
    }
  ]
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = Config::path_in(cwd);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagecraft validation...".bright_blue().bold()
    );

    let example_path = cwd.join(EXAMPLE_DOCUMENT);
    if !example_path.exists() {
        fs::write(&example_path, EXAMPLE_CONTENT)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_DOCUMENT);
    }

    let config = Config {
        skip_types: vec!["wrapper".to_string()],
        ..Default::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Export a page from the editor as JSON");
    println!("  2. Run: pagecraft validate {}", EXAMPLE_DOCUMENT);

    Ok(())
}
