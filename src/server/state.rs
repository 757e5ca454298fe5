//! Server state and configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::StencilError;
use crate::fields::FieldCatalog;
use crate::session::{PrintFacility, PrintScheduler, Session, SharedSession, SpoolPrinter};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Field catalog JSON; the built-in sample catalog when `None`
    pub fields_path: Option<PathBuf>,
    /// Directory print jobs are written to
    pub spool_dir: PathBuf,
    /// Delay between entering preview and printing
    pub print_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            fields_path: None,
            spool_dir: PathBuf::from("spool"),
            print_delay: crate::session::print::DEFAULT_PRINT_DELAY,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    pub catalog: Arc<FieldCatalog>,
    pub session: SharedSession,
    pub printer: PrintScheduler,
}

impl AppState {
    /// Load the catalog and set up spool printing per `config`.
    pub fn new(config: ServerConfig) -> Result<Self, StencilError> {
        let catalog = match &config.fields_path {
            Some(path) => FieldCatalog::load(path)?,
            None => FieldCatalog::sample(),
        };
        let facility = Arc::new(SpoolPrinter::new(config.spool_dir.clone()));
        Ok(Self::with_parts(config, catalog, facility))
    }

    /// Assemble state from an explicit catalog and print facility.
    pub fn with_parts(
        config: ServerConfig,
        catalog: FieldCatalog,
        facility: Arc<dyn PrintFacility>,
    ) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let printer = PrintScheduler::new(facility, config.print_delay);
        Self {
            config,
            boot_time,
            catalog: Arc::new(catalog),
            session: Session::new().into_shared(),
            printer,
        }
    }
}
