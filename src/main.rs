//! # Stencil CLI
//!
//! Command-line interface for the template designer.
//!
//! ## Usage
//!
//! ```bash
//! # Start the designer on http://localhost:8080
//! stencil serve
//!
//! # Render a saved template with sample data, for printing
//! stencil render --template report.json --preview --medium print
//!
//! # List element kinds and bindable fields
//! stencil kinds
//! stencil fields --fields catalog.json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stencil::{
    FieldCatalog, Session, StencilError, Template,
    document,
    render::{Medium, ViewMode},
    server::{self, ServerConfig},
};

/// Stencil - Document template designer
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the designer web server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Field catalog JSON (defaults to built-in sample data)
        #[arg(long, value_name = "FILE")]
        fields: Option<PathBuf>,

        /// Directory print jobs are written to
        #[arg(long, default_value = "spool")]
        spool: PathBuf,

        /// Delay before printing, in milliseconds
        #[arg(long, default_value = "300")]
        print_delay_ms: u64,
    },

    /// Render a template file to HTML on stdout
    Render {
        /// Template JSON: an array of {id, kind, props}
        #[arg(long, value_name = "FILE")]
        template: PathBuf,

        /// Field catalog JSON (defaults to built-in sample data)
        #[arg(long, value_name = "FILE")]
        fields: Option<PathBuf>,

        /// Resolve bindings against the catalog
        #[arg(long)]
        preview: bool,

        /// Output medium
        #[arg(long, value_enum, default_value = "screen")]
        medium: MediumArg,
    },

    /// List element kinds with their default properties
    Kinds,

    /// List bindable fields
    Fields {
        /// Field catalog JSON (defaults to built-in sample data)
        #[arg(long, value_name = "FILE")]
        fields: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MediumArg {
    Screen,
    Print,
}

impl From<MediumArg> for Medium {
    fn from(arg: MediumArg) -> Self {
        match arg {
            MediumArg::Screen => Medium::Screen,
            MediumArg::Print => Medium::Print,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stencil=info,tower_http=info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<FieldCatalog, StencilError> {
    match path {
        Some(path) => Ok(FieldCatalog::load(path)?),
        None => Ok(FieldCatalog::sample()),
    }
}

fn run() -> Result<(), StencilError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            fields,
            spool,
            print_delay_ms,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                fields_path: fields,
                spool_dir: spool,
                print_delay: Duration::from_millis(print_delay_ms),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }

        Commands::Render {
            template,
            fields,
            preview,
            medium,
        } => {
            let catalog = load_catalog(fields.as_deref())?;
            let json = std::fs::read_to_string(&template)?;
            let template: Template = serde_json::from_str(&json)?;

            let mut session = Session::with_template(template);
            if preview {
                session.set_view(ViewMode::Previewing);
            }
            println!("{}", session.render(&catalog, medium.into()));
            Ok(())
        }

        Commands::Kinds => {
            for kind in document::element_kinds() {
                println!("{:<16} {}", kind.type_name, kind.label);
                println!("  {}", serde_json::to_string(&kind.default_props)?);
            }
            Ok(())
        }

        Commands::Fields { fields } => {
            let catalog = load_catalog(fields.as_deref())?;
            for field in catalog.iter() {
                let kind = format!("{:?}", field.kind());
                println!("{:<20} {:<8} {}", field.id, kind, field.label);
            }
            Ok(())
        }
    }
}
