use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::mpsc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use notify::{Event, RecursiveMode, Watcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fluid_button_forge::clamp::ViewportRange;
use fluid_button_forge::settings::{DEFAULT_MAX_VIEWPORT, DEFAULT_MIN_VIEWPORT};
use fluid_button_forge::{Project, Unit};

#[derive(Parser)]
#[command(name = "forge", version)]
#[command(about = "Fluid Button Forge: responsive button CSS with clamp()")]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a project file with the default settings and button classes
    Init {
        /// Write to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate CSS for a project file
    Generate {
        /// Input project JSON file
        file: PathBuf,

        /// Only this button class (omits border-width for borderless buttons)
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Validate a project file without producing output
    Check {
        /// Input project JSON file
        file: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print a single clamp() value
    Clamp {
        /// Value at the min viewport
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Value at the max viewport
        #[arg(allow_negative_numbers = true)]
        max: f64,

        #[arg(long, default_value_t = DEFAULT_MIN_VIEWPORT)]
        min_viewport: f64,

        #[arg(long, default_value_t = DEFAULT_MAX_VIEWPORT)]
        max_viewport: f64,

        #[arg(long, value_enum, default_value_t = Unit::Px)]
        unit: Unit,
    },

    /// Regenerate CSS every time the project file changes
    Watch {
        /// Input project JSON file
        file: PathBuf,

        /// Only this button class
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { o, force } => {
            let json = Project::default().to_json_pretty()?;
            match o {
                Some(path) => {
                    if path.exists() && !force {
                        bail!("'{}' already exists (use --force to overwrite)", path.display());
                    }
                    write_output(&path, &json, "project")?;
                }
                None => println!("{json}"),
            }
        }

        Commands::Generate { file, class_name, o } => {
            let css = generate(&file, class_name.as_deref())?;
            match o {
                Some(path) => write_output(&path, &css, "CSS")?,
                None => println!("{css}"),
            }
        }

        Commands::Check { file, strict } => {
            let project = load_project(&file)?;
            let warnings = project.check()?;
            for w in &warnings {
                eprintln!("warning: {w}");
            }
            if strict && !warnings.is_empty() {
                bail!("{} warning(s) in strict mode", warnings.len());
            }
            eprintln!(
                "ok: {} button class(es), viewport {}px..{}px, {}",
                project.class_sizes.len(),
                project.settings.min_viewport,
                project.settings.max_viewport,
                project.settings.unit_type
            );
        }

        Commands::Clamp {
            min,
            max,
            min_viewport,
            max_viewport,
            unit,
        } => {
            let viewport = ViewportRange::new(min_viewport, max_viewport)?;
            println!("{}", fluid_button_forge::generate(min, max, &viewport, unit)?);
        }

        Commands::Watch { file, class_name, o } => {
            watch(&file, class_name.as_deref(), o.as_deref())?;
        }
    }
    Ok(())
}

fn load_project(file: &Path) -> anyhow::Result<Project> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("cannot read '{}'", file.display()))?;
    Project::from_json(&source).with_context(|| format!("cannot load '{}'", file.display()))
}

fn generate(file: &Path, class_name: Option<&str>) -> anyhow::Result<String> {
    let project = load_project(file)?;
    let css = match class_name {
        Some(name) => project.generate_button_css(name)?,
        None => project.generate_css()?,
    };
    Ok(css)
}

fn write_output(path: &Path, contents: &str, kind: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("cannot write '{}'", path.display()))?;
    eprintln!("wrote {kind} to {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// One regeneration pass. Errors are reported and the watch keeps going.
fn regenerate(file: &Path, class_name: Option<&str>, out: Option<&Path>) {
    let result = generate(file, class_name).and_then(|css| match out {
        Some(path) => write_output(path, &css, "CSS"),
        None => {
            println!("{css}");
            Ok(())
        }
    });
    if let Err(e) = result {
        eprintln!("error: {e:#}");
    }
}

fn watch(file: &Path, class_name: Option<&str>, out: Option<&Path>) -> anyhow::Result<()> {
    regenerate(file, class_name, out);

    let target = file.file_name().map(|n| n.to_os_string());
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            let ours = event.paths.iter().any(|p| p.file_name() == target.as_deref());
            if event.kind.is_modify() && ours {
                let _ = tx.send(());
            }
        }
    })?;

    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    eprintln!("watching {} for changes...", file.display());

    for () in rx {
        regenerate(file, class_name, out);
    }

    // Keep watcher alive
    drop(watcher);
    Ok(())
}
