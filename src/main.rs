use clap::{ArgAction, Parser, Subcommand};
use image_timeline::logging::{self, LogFormat};
use image_timeline::{config, output, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-timeline")]
#[command(about = "Static browsing site generator for image timelines")]
#[command(long_about = "\
Static browsing site generator for image timelines

Every image in the source folder becomes a page with a viewer, a pin-notes
panel and navigation to every other image. The first image in the timeline is
the landing page; the rest are written to the pages folder.

Site layout:

  ./
  ├── site.toml        # Optional config (see 'image-timeline gen-config')
  ├── pdfs/            # Source images: png, jpg, jpeg, webp, gif
  ├── index.html       # Landing page (generated)
  ├── pages/           # One page per remaining image (generated)
  ├── styles.css       # Shared stylesheet (yours)
  └── comments.js      # Annotation script (yours)

Ordering:
  [Fase N] Nuevos destinos - Propietarios - ES   first, by phase, then
  Propietarios before No propietarios, ES before EN. Other names follow,
  oldest first.

Running without a subcommand is the same as 'image-timeline build'.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the landing page and every subpage
    Build,
    /// Show the planned timeline without writing anything
    Check {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.root)?;
            let report = site::build(&cli.root, &site_config)?;
            output::print_build_output(&report, &site_config.paths);
        }
        Command::Check { json } => {
            let site_config = config::load_config(&cli.root)?;
            let documents = site::plan(&cli.root, &site_config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&documents)?);
            } else {
                output::print_check_output(&documents, &site_config.paths);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
