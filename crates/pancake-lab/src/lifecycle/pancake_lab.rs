use crate::config::LabConfig;
use crate::order_log::{self, OrderLog};
use crate::repository::{OrderRepository, PancakeRepository};
use crate::service::PancakeService;
use crate::validators::{AddressValidator, PancakeValidator};
use entity_framework::FrameworkError;
use std::sync::Arc;
use tracing::{error, info};

/// The running kitchen: the lifecycle service, its storage and its activity journal.
///
/// # Architecture
///
/// - **Service**: [`PancakeService`], the only thing callers need to drive orders
/// - **Storage**: order and pancake repositories, shared with the service. They are exposed
///   read-only for inspection (tests, diagnostics).
/// - **Journal**: a `JournalActor` task fed through [`OrderLog`]
pub struct PancakeLab {
    /// Lifecycle operations.
    pub service: PancakeService,

    /// Handle for reading back the activity journal.
    pub order_log: OrderLog,

    pub orders: Arc<OrderRepository>,
    pub pancakes: Arc<PancakeRepository>,

    /// Journal actor task (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl PancakeLab {
    /// Creates the kitchen and starts its journal.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &LabConfig) -> Self {
        let (journal, order_log) = order_log::new(config.journal_buffer);
        let handle = tokio::spawn(journal.run());

        let orders = Arc::new(OrderRepository::new());
        let pancakes = Arc::new(PancakeRepository::new());

        let service = PancakeService::new(
            AddressValidator,
            PancakeValidator,
            orders.clone(),
            pancakes.clone(),
            order_log.clone(),
        );

        info!(journal_buffer = config.journal_buffer, "Pancake lab started");

        Self {
            service,
            order_log,
            orders,
            pancakes,
            handle,
        }
    }

    /// Gracefully shuts down the kitchen.
    ///
    /// Dropping the service and the log closes the journal channel; the journal writes what
    /// is still queued and exits.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down pancake lab...");

        drop(self.service);
        drop(self.order_log);

        if let Err(e) = self.handle.await {
            error!("Journal task failed: {:?}", e);
            return Err(FrameworkError::TaskFailed(e.to_string()));
        }

        info!("Pancake lab shutdown complete.");
        Ok(())
    }
}
