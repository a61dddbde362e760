use std::sync::{Arc, Mutex, Weak};

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

/// In-process change broadcast fired after every successful ledger write.
///
/// Subscribers receive no payload and are expected to re-read the ledger.
/// Delivery is synchronous and same-process only. Clones share one
/// subscriber registry.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns the handle that removes it again.
    /// Dropping the handle without calling [`Subscription::unsubscribe`]
    /// leaves the callback registered.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut id = 0;
        if let Ok(mut registry) = self.registry.lock() {
            registry.next_id += 1;
            id = registry.next_id;
            registry.subscribers.push((id, Arc::new(callback)));
        }
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Invokes every registered callback. Callbacks run outside the registry
    /// lock, so a callback may subscribe, unsubscribe, or notify again.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = match self.registry.lock() {
            Ok(registry) => registry
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect(),
            Err(_) => return,
        };

        for callback in callbacks {
            callback();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .map(|registry| registry.subscribers.len())
            .unwrap_or(0)
    }
}

/// Handle for a registered change callback.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Removes the callback from its notifier. A no-op when the notifier is
    /// already gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.subscribers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
