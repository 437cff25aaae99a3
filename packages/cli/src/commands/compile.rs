use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tokengen_evaluator::StyleEvaluator;
use tokengen_parser::parse;
use walkdir::WalkDir;

const SNAPSHOT_SUFFIX: &str = ".tokens.json";

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Snapshot file to compile (defaults to every .tokens.json under srcDir)
    pub path: Option<String>,

    /// Target format (css, restyle, all) - overrides config emit list
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Pixel base for rem conversion (overrides config)
    #[arg(short, long)]
    pub base_size: Option<f64>,

    /// Log evaluator diagnostics to the console
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Css,
    Restyle,
}

impl Target {
    fn from_name(name: &str) -> Result<Vec<Target>> {
        match name {
            "css" => Ok(vec![Target::Css]),
            "restyle" => Ok(vec![Target::Restyle]),
            "all" => Ok(vec![Target::Css, Target::Restyle]),
            other => Err(anyhow!("Unknown target: {}", other)),
        }
    }
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let config = Config::load(cwd)?;
    let targets = resolve_targets(&args, &config)?;
    let base_size = args.base_size.unwrap_or(config.base_font_size);

    let snapshot_files = if let Some(ref path) = args.path {
        let path = PathBuf::from(cwd).join(path);
        if !path.is_file() {
            return Err(anyhow!("Snapshot file does not exist: {:?}", path));
        }
        vec![path]
    } else {
        let src_dir = config.get_src_dir(cwd);
        if !src_dir.exists() {
            return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
        }
        find_snapshot_files(&src_dir)?
    };

    if snapshot_files.is_empty() {
        println!("{}", "No .tokens.json files found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        "Compiling variable snapshots...".bright_blue().bold()
    );
    println!("Found {} files", snapshot_files.len());

    let mut success_count = 0;
    let mut error_count = 0;

    for snapshot_file in &snapshot_files {
        match compile_file(snapshot_file, &targets, base_size, &args, &config, cwd) {
            Ok(outputs) => {
                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    snapshot_file.display(),
                    outputs.join(", ")
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    snapshot_file.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn resolve_targets(args: &CompileArgs, config: &Config) -> Result<Vec<Target>> {
    if let Some(ref name) = args.target {
        return Target::from_name(name);
    }

    let mut targets = Vec::new();
    for name in &config.emit {
        for target in Target::from_name(name)? {
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
    }
    Ok(targets)
}

fn find_snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_snapshot = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(SNAPSHOT_SUFFIX))
            .unwrap_or(false);
        if path.is_file() && is_snapshot {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn compile_file(
    file_path: &Path,
    targets: &[Target],
    base_size: f64,
    args: &CompileArgs,
    config: &Config,
    cwd: &str,
) -> Result<Vec<String>> {
    let source = fs::read_to_string(file_path)?;

    let snapshot = parse(&source).map_err(|e| {
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        anyhow!("{}: {}", file_name, e)
    })?;

    let evaluator = StyleEvaluator::with_base_font_size(base_size);
    let doc = evaluator.evaluate(&snapshot)?;

    for warning in &doc.warnings {
        println!("  {} {}", "⚠".yellow(), warning.to_string().yellow());
    }

    let mut outputs = Vec::new();
    for target in targets {
        let (output, extension) = match target {
            Target::Css => (tokengen_compiler_css::serialize(&doc), "css"),
            Target::Restyle => (tokengen_compiler_restyle::serialize(&doc), "palette.ts"),
        };

        if args.stdout {
            println!("{}", output);
            outputs.push("stdout".to_string());
            continue;
        }

        let out_dir = if let Some(ref out) = args.out_dir {
            PathBuf::from(cwd).join(out)
        } else {
            PathBuf::from(cwd).join(&config.out_dir)
        };
        fs::create_dir_all(&out_dir)?;

        let output_file = out_dir.join(format!("{}.{}", snapshot_stem(file_path), extension));
        fs::write(&output_file, output)?;
        outputs.push(output_file.display().to_string());
    }

    Ok(outputs)
}

/// File name with the `.tokens.json` suffix stripped
fn snapshot_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tokens");
    name.strip_suffix(SNAPSHOT_SUFFIX)
        .unwrap_or_else(|| name.strip_suffix(".json").unwrap_or(name))
        .to_string()
}
