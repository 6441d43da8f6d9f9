//! Change notification for the task store.

use uuid::Uuid;

/// A change applied to the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended to the active collection.
    TaskAdded {
        /// The new task's ID.
        id: Uuid,
    },
    /// A task moved from active to completed.
    TaskCompleted {
        /// The task's ID.
        id: Uuid,
        /// The mood credited with the completion, if any.
        mood: Option<String>,
    },
    /// A task moved from completed back to active.
    TaskReopened {
        /// The task's ID.
        id: Uuid,
        /// The mood whose count was decremented, if any.
        mood: Option<String>,
    },
    /// A task's fields were replaced in place.
    TaskEdited {
        /// The task's ID.
        id: Uuid,
    },
    /// A task was removed.
    TaskDeleted {
        /// The removed task's ID.
        id: Uuid,
    },
    /// The completed collection was emptied.
    CompletedCleared {
        /// How many tasks were removed.
        count: usize,
    },
    /// The mood statistics were emptied.
    MoodStatsReset,
}

/// Handle returned by [`EventEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreEvent)>;

/// Synchronous event emitter.
///
/// Callbacks run on the caller's thread, in subscription order.
#[derive(Default)]
pub struct EventEmitter {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
    emit_count: u64,
}

impl EventEmitter {
    /// Create an emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for all future events.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver an event to every subscriber.
    ///
    /// Returns the number of subscribers that received it.
    pub fn emit(&mut self, event: &StoreEvent) -> usize {
        self.emit_count += 1;
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
        self.subscribers.len()
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Get the total number of events emitted.
    #[must_use]
    pub const fn emit_count(&self) -> u64 {
        self.emit_count
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.subscribers.len())
            .field("emit_count", &self.emit_count)
            .finish()
    }
}
