use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::trace;

type SubscriptionId = u64;

/// Observable fields of a media page.
///
/// Observers receive the field identifier and re-read the current value
/// from the view-state; no value travels with the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageField {
    Status,
    Position,
    Volume,
    MediaStatus,
}

struct Subscription {
    tx: tokio_mpsc::UnboundedSender<PageField>,
}

/// Fan-out of field-changed notifications to page observers.
///
/// Dispatch is synchronous: notifications are raised from the same
/// UI-thread callbacks that mutate the view-state, so there is no
/// background task. Subscriptions are removed when the receiver is
/// dropped.
pub struct ChangeNotifier {
    subscriptions: Mutex<HashMap<SubscriptionId, Subscription>>,
    next_id: AtomicU64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Subscribe to all field-changed notifications.
    pub fn subscribe(&self) -> tokio_mpsc::UnboundedReceiver<PageField> {
        let (tx, rx) = tokio_mpsc::unbounded_channel();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscriptions
            .lock()
            .unwrap()
            .insert(id, Subscription { tx });
        rx
    }

    /// Tell every observer that `field` may have changed.
    pub fn notify(&self, field: PageField) {
        trace!("Field changed: {:?}", field);
        let mut subs = self.subscriptions.lock().unwrap();
        let mut to_remove = Vec::new();

        for (id, subscription) in subs.iter() {
            // If send fails, receiver was dropped - mark for removal
            if subscription.tx.send(field).is_err() {
                to_remove.push(*id);
            }
        }

        for id in to_remove {
            subs.remove(&id);
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
