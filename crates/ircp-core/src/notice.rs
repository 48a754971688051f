//! Transient inline notices that clear themselves after a delay.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const NOTICE_TTL: Duration = Duration::from_millis(2000);

#[derive(Debug, Default)]
struct Slot {
    message: Option<String>,
    generation: u64,
}

/// One notice line plus its pending clear timer. Raising again restarts the
/// timer; dropping the notice cancels it.
#[derive(Debug)]
pub struct Notice {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl Default for Notice {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Notice {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            ttl,
        }
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.slot).message.clone()
    }

    /// Show `message` and schedule it to clear. Outside a tokio runtime the
    /// message stays until the next `raise` or `clear`.
    pub fn raise(&mut self, message: &str) {
        self.cancel_timer();
        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.message = Some(message.to_string());
            slot.generation
        };

        let Ok(handle) = Handle::try_current() else {
            tracing::debug!("no runtime, notice will not auto-clear");
            return;
        };
        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.message = None;
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Notice {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
