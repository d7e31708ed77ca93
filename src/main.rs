use clap::{Parser, Subcommand, ValueEnum};
use reunion_book::export::{self, DirectoryDelivery, ExportKind};
use reunion_book::store::ProfileStore;
use reunion_book::{config, intake, output, views};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "reunion-book")]
#[command(about = "Collect class reunion profiles into pages, a yearbook, and exports")]
#[command(long_about = "\
Collect class reunion profiles into pages, a yearbook, and exports

Each attendee's answers are one TOML or JSON file in the submissions
directory. Files are read in numeric-prefix order and become profiles for
this session; nothing is kept between runs.

Submissions structure:

  submissions/
  ├── config.toml                  # Reunion config (optional)
  ├── 001-omri.toml                # Numbered = fixed position
  ├── 002-dana/                    # A folder per attendee works too
  │   ├── profile.json
  │   ├── then.jpg                 # Photo paths are relative to the file
  │   └── now.png
  └── late-entry.toml              # Unnumbered = after all numbered ones

Output:

  dist/
  ├── index.html                   # The questionnaire
  ├── profiles.html
  ├── gallery.html                 # Every photo, captioned
  ├── yearbook.html                # Dedications
  ├── outputs.html                 # Download links
  ├── reunion_data.csv             # Tabular export
  └── presentation_data.txt        # Narrative export

Run 'reunion-book gen-config' for a documented config.toml and
'reunion-book gen-profile' for a submission template.")]
#[command(version)]
struct Cli {
    /// Submissions directory
    #[arg(long, default_value = "submissions", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log progress and per-file details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read and validate submissions, then list the session's profiles
    Check,
    /// Render every view and write both exports
    Build,
    /// Write export artifacts only
    Export {
        #[arg(value_enum, default_value_t = ExportChoice::All)]
        kind: ExportChoice,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a commented submission template
    GenProfile,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportChoice {
    Tabular,
    Narrative,
    All,
}

impl ExportChoice {
    fn kinds(self) -> &'static [ExportKind] {
        match self {
            ExportChoice::Tabular => &[ExportKind::Tabular],
            ExportChoice::Narrative => &[ExportKind::Narrative],
            ExportChoice::All => &ExportKind::ALL,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            load_session(&cli.source)?;
            println!("==> Submissions are valid");
        }
        Command::Build => {
            let (config, store) = load_session(&cli.source)?;

            println!("==> Rendering views \u{2192} {}", cli.output.display());
            let written = views::render_site(&store, &config, &cli.output)?;
            output::print_site_output(&written, &cli.output);

            println!("==> Exporting");
            run_exports(ExportKind::ALL.as_slice(), &store, &config, &cli.output)?;

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Export { kind } => {
            let (config, store) = load_session(&cli.source)?;
            println!("==> Exporting \u{2192} {}", cli.output.display());
            run_exports(kind.kinds(), &store, &config, &cli.output)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenProfile => {
            print!("{}", intake::stock_profile_toml());
        }
    }

    Ok(())
}

/// Set up `env_logger`. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

/// Load config and submissions into a fresh session store, printing the inventory.
fn load_session(
    source: &Path,
) -> Result<(config::ReunionConfig, ProfileStore), Box<dyn std::error::Error>> {
    let config = config::load_config(source)?;
    init_thread_pool(&config.processing);

    let nonce = intake::session_nonce();
    let submissions = intake::load_submissions(source, &config, &nonce)?;
    output::print_intake_output(&submissions, source);

    let mut store = ProfileStore::new();
    for submission in submissions {
        store.append(submission.profile);
    }
    Ok((config, store))
}

fn run_exports(
    kinds: &[ExportKind],
    store: &ProfileStore,
    config: &config::ReunionConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut delivery = DirectoryDelivery::new(output_dir);
    for &kind in kinds {
        let outcome = export::export(kind, store.all(), config.language, &mut delivery)?;
        output::print_export_outcome(kind, &outcome);
    }
    Ok(())
}
