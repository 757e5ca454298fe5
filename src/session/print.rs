//! Delayed printing.
//!
//! Requesting a print switches the session to preview and returns a
//! [`PrintTicket`]. The [`PrintScheduler`] waits a short delay so the
//! preview can paint, then renders the session for the print medium and
//! hands the HTML to a [`PrintFacility`].
//!
//! A ticket is stale when the session left preview or a newer print was
//! requested before the delay elapsed; stale tickets are dropped without
//! printing. Once a print has been handed to the facility, its completion
//! returns the session to editing regardless of the outcome.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::{PrintTicket, SharedSession};
use crate::error::StencilError;
use crate::fields::FieldCatalog;
use crate::render::Medium;

/// Delay between entering preview and invoking the print facility.
pub const DEFAULT_PRINT_DELAY: Duration = Duration::from_millis(300);

/// External "render to the print medium" facility.
#[async_trait]
pub trait PrintFacility: Send + Sync {
    /// Print a fully rendered document.
    async fn print(&self, html: &str) -> Result<(), StencilError>;
}

/// Print facility that writes each job into a spool directory.
///
/// Jobs are named `<timestamp>-<n>.html`, where `n` counts jobs since start.
pub struct SpoolPrinter {
    dir: PathBuf,
    jobs: AtomicU64,
}

impl SpoolPrinter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            jobs: AtomicU64::new(0),
        }
    }

    fn next_path(&self) -> PathBuf {
        let n = self.jobs.fetch_add(1, Ordering::Relaxed) + 1;
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        self.dir.join(format!("{}-{}.html", stamp, n))
    }
}

#[async_trait]
impl PrintFacility for SpoolPrinter {
    async fn print(&self, html: &str) -> Result<(), StencilError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.next_path();
        tokio::fs::write(&path, wrap_document(html)).await?;
        info!(path = %path.display(), "print job spooled");
        Ok(())
    }
}

/// Wrap a rendered page in a standalone HTML document.
fn wrap_document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Template</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

/// What happened to a scheduled print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed,
    /// The ticket went stale before the delay elapsed.
    Suppressed,
    Failed(String),
}

/// Runs delayed prints against a shared session.
#[derive(Clone)]
pub struct PrintScheduler {
    facility: Arc<dyn PrintFacility>,
    delay: Duration,
}

impl PrintScheduler {
    pub fn new(facility: Arc<dyn PrintFacility>, delay: Duration) -> Self {
        Self { facility, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn the delayed print for `ticket`.
    pub fn schedule(
        &self,
        session: SharedSession,
        catalog: Arc<FieldCatalog>,
        ticket: PrintTicket,
    ) -> JoinHandle<PrintOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.run(session, catalog, ticket).await })
    }

    async fn run(
        &self,
        session: SharedSession,
        catalog: Arc<FieldCatalog>,
        ticket: PrintTicket,
    ) -> PrintOutcome {
        tokio::time::sleep(self.delay).await;

        let html = {
            let session = session.read().await;
            if !session.is_print_current(ticket) {
                info!(?ticket, "print suppressed: ticket is stale");
                return PrintOutcome::Suppressed;
            }
            session.render(&catalog, Medium::Print)
        };

        let result = self.facility.print(&html).await;
        session.write().await.finish_print();

        match result {
            Ok(()) => {
                info!(?ticket, "print finished");
                PrintOutcome::Printed
            }
            Err(e) => {
                warn!(?ticket, error = %e, "print failed");
                PrintOutcome::Failed(e.to_string())
            }
        }
    }
}
