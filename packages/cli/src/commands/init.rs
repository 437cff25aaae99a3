use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target format (css, restyle, all)
    #[arg(short, long, default_value = "css")]
    pub target: String,

    /// Snapshot source directory
    #[arg(short, long, default_value = "tokens")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
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
        "📝 Initializing tokengen project...".bright_blue().bold()
    );

    // Create snapshot directory if it doesn't exist
    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Create example snapshot file
    let example_file = src_dir.join("example.tokens.json");
    if !example_file.exists() {
        let example_content = r#"{
  "collections": [
    {
      "id": "VariableCollectionId:1:1",
      "name": "Brand",
      "modes": [{ "modeId": "1:0", "name": "Light" }],
      "variableIds": ["VariableID:1:2", "VariableID:1:3"]
    }
  ],
  "variables": [
    {
      "id": "VariableID:1:2",
      "name": "primaryColor",
      "resolvedType": "COLOR",
      "variableCollectionId": "VariableCollectionId:1:1",
      "valuesByMode": { "1:0": { "r": 0.2, "g": 0.4, "b": 1.0, "a": 1.0 } }
    },
    {
      "id": "VariableID:1:3",
      "name": "spacingBase",
      "resolvedType": "FLOAT",
      "variableCollectionId": "VariableCollectionId:1:1",
      "valuesByMode": { "1:0": 16 }
    }
  ]
}
"#;
        fs::write(&example_file, example_content)?;
        println!("  {} Created example.tokens.json", "✓".green());
    }

    // Determine emit targets
    let emit = match args.target.as_str() {
        "all" => vec!["css".to_string(), "restyle".to_string()],
        target => vec![target.to_string()],
    };

    // Create config
    let config = Config {
        src_dir: args.src_dir.clone(),
        emit,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Export your variables into {}/", args.src_dir);
    println!("  2. Run {} to generate output", "tokengen compile".bright_white());

    Ok(())
}
