//! Activity Dispatcher
//!
//! `ActivityStore` implementation that persists each activity through the
//! canonical activity log, then fans the durable record out to any number
//! of best-effort observers. Observer failures are logged and never change
//! the result of the append.

use std::sync::Arc;

use async_trait::async_trait;

use fieldnote::{Activity, ActivityLog, ActivityObserver, ActivityStore, MessagingError};

pub struct ActivityDispatcher {
    log: Option<Arc<dyn ActivityLog>>,
    observers: Vec<Arc<dyn ActivityObserver>>,
}

impl ActivityDispatcher {
    pub fn new() -> Self {
        Self {
            log: None,
            observers: Vec::new(),
        }
    }

    /// Wire the canonical handler that owns persistence
    pub fn with_log(mut self, log: Arc<dyn ActivityLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Add a best-effort observer, notified after persistence
    pub fn with_observer(mut self, observer: Arc<dyn ActivityObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl Default for ActivityDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityStore for ActivityDispatcher {
    async fn append(&self, activity: &Activity) -> Result<Option<Activity>, MessagingError> {
        let log = match &self.log {
            Some(log) => log,
            None => return Ok(None),
        };

        let recorded = log.record(activity).await?;

        for observer in &self.observers {
            if let Err(e) = observer.notify(&recorded).await {
                tracing::warn!(
                    "Observer {} failed to deliver activity {}: {}",
                    observer.name(),
                    recorded.id,
                    e
                );
            }
        }

        Ok(Some(recorded))
    }
}
