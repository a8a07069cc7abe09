//! # form-forge-cli
//!
//! CLI tool for building forms and generating React/Zod code from them.
//!
//! ## Usage
//!
//! ```bash
//! # Create a form document and add fields
//! form-forge new signup.json
//! form-forge add signup.json email
//! form-forge rename signup.json fld_... work_email
//!
//! # Generate the component and schema
//! form-forge generate signup.json --output ./generated
//!
//! # Watch mode for development
//! form-forge generate signup.json --watch
//!
//! # Check that generated files are up-to-date
//! form-forge validate signup.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use form_forge::{ComponentRegistry, CustomOptions, FieldId, FormDefinition, PropsPatch, sanitize_name};
use form_forge_cli::{
    config::{CONFIG_FILENAME, CliArgs, Config, ConfigManager},
    document::DocumentStore,
    error::{CliError, CliResult, ConfigError},
    generator::{ArtifactOutcome, FormGenerator, Staleness},
    watcher::{FileWatcher, WatchEvent},
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "form-forge")]
#[command(author, version, about = "Build forms and generate React/Zod form code", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new form-forge configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List the available field kinds
    Kinds,

    /// Create an empty form document
    New {
        /// Path of the form document
        document: PathBuf,

        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },

    /// Add a field of the given kind to the end of the form
    Add {
        /// Path of the form document
        document: PathBuf,

        /// Field kind (see `form-forge kinds`)
        kind: String,
    },

    /// Remove a field
    Remove {
        /// Path of the form document
        document: PathBuf,

        /// Field id
        #[arg(value_parser = parse_field_id)]
        id: FieldId,
    },

    /// Rename a field
    Rename {
        /// Path of the form document
        document: PathBuf,

        /// Field id
        #[arg(value_parser = parse_field_id)]
        id: FieldId,

        /// New field name
        name: String,

        /// Convert the name to a valid identifier first
        #[arg(long)]
        sanitize: bool,
    },

    /// Move a field to the position of another field
    Move {
        /// Path of the form document
        document: PathBuf,

        /// Field id to move
        #[arg(value_parser = parse_field_id)]
        active: FieldId,

        /// Field id whose position it takes
        #[arg(value_parser = parse_field_id)]
        over: FieldId,
    },

    /// Set one visual property of a field
    SetProp {
        /// Path of the form document
        document: PathBuf,

        /// Field id
        #[arg(value_parser = parse_field_id)]
        id: FieldId,

        /// Property key (label, required, helperText, placeholder, className, ...)
        key: String,

        /// JSON value; anything that is not valid JSON is taken as a string
        #[arg(value_parser = parse_json_value)]
        value: Value,
    },

    /// Set one validation option of a field
    SetOption {
        /// Path of the form document
        document: PathBuf,

        /// Field id
        #[arg(value_parser = parse_field_id)]
        id: FieldId,

        /// Option key (e.g. minLength, allowedDomains, options)
        key: String,

        /// JSON value; anything that is not valid JSON is taken as a string
        #[arg(value_parser = parse_json_value)]
        value: Value,
    },

    /// Print the fields of a form in order
    List {
        /// Path of the form document
        document: PathBuf,
    },

    /// Generate the form component and Zod schema
    Generate {
        /// Path of the form document
        document: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the generated component
        #[arg(long)]
        form_name: Option<String>,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Watch the document and regenerate on change
        #[arg(short, long)]
        watch: bool,
    },

    /// Validate that generated files are up-to-date
    Validate {
        /// Path of the form document
        document: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{} logging already initialized", "Warning:".yellow());
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let registry = ComponentRegistry::builtin();

    match cli.command {
        Commands::Init { output, force } => cmd_init(output, force),
        Commands::Kinds => cmd_kinds(&registry),
        Commands::New { document, force } => cmd_new(&document, force),
        Commands::Add { document, kind } => cmd_add(&registry, &document, &kind),
        Commands::Remove { document, id } => cmd_remove(&registry, &document, id),
        Commands::Rename {
            document,
            id,
            name,
            sanitize,
        } => cmd_rename(&registry, &document, id, &name, sanitize),
        Commands::Move {
            document,
            active,
            over,
        } => cmd_move(&registry, &document, active, over),
        Commands::SetProp {
            document,
            id,
            key,
            value,
        } => cmd_set_prop(&registry, &document, id, &key, value),
        Commands::SetOption {
            document,
            id,
            key,
            value,
        } => cmd_set_option(&registry, &document, id, key, value),
        Commands::List { document } => cmd_list(&registry, &document),
        Commands::Generate {
            document,
            output,
            config,
            form_name,
            dry_run,
            watch,
        } => cmd_generate(
            registry,
            &document,
            CliArgs {
                output,
                form_name,
                ..Default::default()
            },
            config.as_deref(),
            dry_run,
            watch,
        ),
        Commands::Validate { document, config } => {
            cmd_validate(registry, &document, config.as_deref())
        }
    }
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> CliResult<()> {
    if output.exists() && !force {
        return Err(ConfigError::AlreadyExists { path: output }.into());
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;
    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );
    Ok(())
}

/// Kinds command implementation.
fn cmd_kinds(registry: &ComponentRegistry) -> CliResult<()> {
    for category in registry.categories() {
        println!("{}", category.name().cyan().bold());
        for kind in category.kinds() {
            println!(
                "  {} {:<10} {}",
                format!("{:<10}", kind.kind()).green(),
                kind.display_name(),
                kind.description().dimmed()
            );
        }
    }
    Ok(())
}

/// New command implementation.
fn cmd_new(document: &Path, force: bool) -> CliResult<()> {
    DocumentStore::new(document).create(force)?;
    println!(
        "{} Created form document: {}",
        "✓".green(),
        document.display()
    );
    Ok(())
}

/// Add command implementation.
fn cmd_add(registry: &ComponentRegistry, document: &Path, kind: &str) -> CliResult<()> {
    let (id, name) = DocumentStore::new(document).edit(registry, |form| {
        let id = form.add_field(registry, kind)?;
        let name = form.get(id).map(|f| f.name.clone()).unwrap_or_default();
        Ok((id, name))
    })?;

    println!("{} Added {} field {}", "✓".green(), kind, name.green());
    println!("  {}", id);
    Ok(())
}

/// Remove command implementation.
fn cmd_remove(registry: &ComponentRegistry, document: &Path, id: FieldId) -> CliResult<()> {
    let removed = DocumentStore::new(document).edit(registry, |form| Ok(form.remove_field(id)))?;

    if removed {
        println!("{} Removed {}", "✓".green(), id);
    } else {
        println!("{} No field {}, nothing removed", "-".dimmed(), id);
    }
    Ok(())
}

/// Rename command implementation.
fn cmd_rename(
    registry: &ComponentRegistry,
    document: &Path,
    id: FieldId,
    name: &str,
    sanitize: bool,
) -> CliResult<()> {
    let name = if sanitize {
        sanitize_name(name)
    } else {
        name.to_string()
    };

    DocumentStore::new(document).edit(registry, |form| form.rename_field(id, &name))?;
    println!("{} Renamed {} to {}", "✓".green(), id, name.green());
    Ok(())
}

/// Move command implementation.
fn cmd_move(
    registry: &ComponentRegistry,
    document: &Path,
    active: FieldId,
    over: FieldId,
) -> CliResult<()> {
    let moved =
        DocumentStore::new(document).edit(registry, |form| Ok(form.move_field(active, over)))?;

    if moved {
        println!("{} Moved {}", "✓".green(), active);
    } else {
        println!("{} Order unchanged", "-".dimmed());
    }
    Ok(())
}

/// Set-prop command implementation.
fn cmd_set_prop(
    registry: &ComponentRegistry,
    document: &Path,
    id: FieldId,
    key: &str,
    value: Value,
) -> CliResult<()> {
    let patch = PropsPatch::from_pair(key, value).map_err(|e| CliError::invalid_value(key, e))?;

    DocumentStore::new(document).edit(registry, |form| form.update_props(id, patch))?;
    println!("{} Set {} on {}", "✓".green(), key, id);
    Ok(())
}

/// Set-option command implementation.
fn cmd_set_option(
    registry: &ComponentRegistry,
    document: &Path,
    id: FieldId,
    key: String,
    value: Value,
) -> CliResult<()> {
    let message = format!("{} Set option {} on {}", "✓".green(), key, id);
    let partial = CustomOptions::new().with(key, value);

    DocumentStore::new(document).edit(registry, |form| form.update_custom_options(id, partial))?;
    println!("{}", message);
    Ok(())
}

/// List command implementation.
fn cmd_list(registry: &ComponentRegistry, document: &Path) -> CliResult<()> {
    let form = DocumentStore::new(document).load(registry)?;
    print_fields(&form);
    Ok(())
}

fn print_fields(form: &FormDefinition) {
    if form.is_empty() {
        println!("{}", "No fields added yet.".yellow());
        return;
    }

    for (index, field) in form.instances().iter().enumerate() {
        let required = if field.is_required() { "*" } else { " " };
        println!(
            "{:>3}. {} {} {:<10} {}",
            index + 1,
            required.red(),
            format!("{:<20}", field.name).green(),
            field.kind,
            field.id.to_string().dimmed()
        );
    }
}

/// Generate command implementation.
fn cmd_generate(
    registry: ComponentRegistry,
    document: &Path,
    args: CliArgs,
    config_path: Option<&Path>,
    dry_run: bool,
    watch: bool,
) -> CliResult<()> {
    let config = ConfigManager::load(config_path)?;
    let config = ConfigManager::merge_cli_args(config, &args);
    config.validate()?;
    let generator = FormGenerator::new(registry, config);
    let store = DocumentStore::new(document);
    let writer = FileWriter::new(dry_run);

    if watch {
        run_watch_mode(&generator, &store, &writer)
    } else {
        run_generate(&generator, &store, &writer)
    }
}

/// Generate and write both artifacts once.
fn run_generate(
    generator: &FormGenerator,
    store: &DocumentStore,
    writer: &FileWriter,
) -> CliResult<()> {
    println!("{} {}", "Generating from".cyan(), store.path().display());

    let form = store.load(generator.registry())?;
    println!("  Found {} field(s)", form.len().to_string().green());

    let artifacts = generator.generate(&form);
    let outcomes = generator.write(&artifacts, writer)?;

    let mut failed = Vec::new();
    for outcome in outcomes {
        match outcome {
            ArtifactOutcome::Saved(WriteResult::Written { path, bytes }) => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            ArtifactOutcome::Saved(WriteResult::DryRun { content, path }) => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
            ArtifactOutcome::Failed { kind, message } => {
                println!("{} {} not written: {}", "✗".red(), kind, message);
                failed.push(format!("{}: {}", kind, message));
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::Generation(failed.join("; ")))
    }
}

/// Run in watch mode.
fn run_watch_mode(
    generator: &FormGenerator,
    store: &DocumentStore,
    writer: &FileWriter,
) -> CliResult<()> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", store.path().display());
    println!("  Press Ctrl+C to stop\n");

    if let Err(e) = run_generate(generator, store, writer) {
        print_error(&e);
    }

    let watcher = FileWatcher::new(store.path());
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        match &event {
            WatchEvent::Error(message) => {
                println!("{} {}", "Watch error:".red(), message);
                continue;
            }
            WatchEvent::Deleted(path) => {
                println!("{} {} was deleted", "Warning:".yellow(), path.display());
                continue;
            }
            WatchEvent::Modified(path) => {
                println!("\n{} {}", "Document changed:".cyan(), path.display());
            }
        }

        if let Err(e) = run_generate(generator, store, writer) {
            print_error(&e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    registry: ComponentRegistry,
    document: &Path,
    config_path: Option<&Path>,
) -> CliResult<()> {
    println!("{}", "Validating generated files...".cyan());

    let config: Config = ConfigManager::load(config_path)?;
    let generator = FormGenerator::new(registry, config);
    let form = DocumentStore::new(document).load(generator.registry())?;

    let artifacts = generator.generate(&form);
    if let Some(error) = artifacts.iter().find_map(|a| a.error()) {
        return Err(CliError::Generation(error.to_string()));
    }

    let stale = generator.check(&artifacts)?;
    if stale.is_empty() {
        println!("{} Generated files are up-to-date", "✓".green());
        return Ok(());
    }

    for entry in &stale {
        match entry {
            Staleness::Missing(path) => println!("{} {} is missing", "✗".red(), path.display()),
            Staleness::Outdated(path) => {
                println!("{} {} is out of date", "✗".red(), path.display())
            }
        }
    }
    println!("  Run 'form-forge generate' to update");
    Err(CliError::Validation(format!(
        "{} generated file(s) out of date",
        stale.len()
    )))
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

/// Parse a field id argument (`fld_<uuid>` or a bare UUID).
fn parse_field_id(raw: &str) -> Result<FieldId, String> {
    FieldId::parse(raw).map_err(|e| format!("invalid field id '{}': {}", raw, e))
}

/// Parse a JSON argument, falling back to a plain string.
fn parse_json_value(raw: &str) -> Result<Value, String> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())))
}
