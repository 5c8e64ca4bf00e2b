//! Event Bus implementation.
//!
//! Synchronous multicast: `publish` runs every matching handler inline on
//! the caller's thread, in subscription order, before it returns. A handler
//! that panics unwinds into the verb that published the event.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::events::{EventCategory, ViewerEvent};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &ViewerEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Arc<dyn Fn(&ViewerEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: EventHandler,
}

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
    /// How long to retain events in history.
    pub history_retention: Duration,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 1000,
            history_retention: Duration::from_secs(300),
        }
    }
}

/// Event with timestamp for history
#[derive(Debug, Clone)]
struct TimestampedEvent {
    event: ViewerEvent,
    timestamp: Instant,
}

/// Error types for event bus operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Multicast notification channel owned by one viewer engine.
///
/// Cloning yields another handle onto the same subscriber list, so the host
/// application can keep a handle while the engine publishes.
#[derive(Clone)]
pub struct EventBus {
    /// Registered handlers, in subscription order
    handlers: Arc<RwLock<Vec<Subscription>>>,
    /// Event history (optional)
    history: Arc<RwLock<VecDeque<TimestampedEvent>>>,
    /// Configuration
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(Vec::new())),
            history: Arc::new(RwLock::new(VecDeque::new())),
            config,
        }
    }

    /// Publish an event to all matching subscribers
    ///
    /// Returns the number of handlers that ran, or
    /// [`EventBusError::NoSubscribers`] when nobody is subscribed.
    /// Handlers may subscribe or unsubscribe while running; the change
    /// applies from the next publish.
    pub fn publish(&self, event: ViewerEvent) -> Result<usize, EventBusError> {
        // Add to history if enabled
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        let targets: Vec<EventHandler> = {
            let handlers = self.handlers.read();
            if handlers.is_empty() {
                return Err(EventBusError::NoSubscribers);
            }
            handlers
                .iter()
                .filter(|sub| sub.filter.matches(&event))
                .map(|sub| Arc::clone(&sub.handler))
                .collect()
        };

        for handler in &targets {
            handler(&event);
        }

        Ok(targets.len())
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler runs on the publishing thread before `publish` returns.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&ViewerEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers.write().push(Subscription {
            id,
            filter,
            handler: Arc::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|sub| sub.id != id);
        let removed = handlers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get recent event history (if enabled)
    ///
    /// Returns events since the given instant, or all history if None.
    pub fn history(&self, since: Option<Instant>) -> Vec<ViewerEvent> {
        if !self.config.enable_history {
            return Vec::new();
        }

        let history = self.history.read();
        match since {
            Some(since) => history
                .iter()
                .filter(|e| e.timestamp >= since)
                .map(|e| e.event.clone())
                .collect(),
            None => history.iter().map(|e| e.event.clone()).collect(),
        }
    }

    /// Clear event history
    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    /// Add an event to history, maintaining size and age limits
    fn add_to_history(&self, event: &ViewerEvent) {
        let mut history = self.history.write();
        let now = Instant::now();

        history.push_back(TimestampedEvent {
            event: event.clone(),
            timestamp: now,
        });

        let retention = self.config.history_retention;
        while history
            .front()
            .is_some_and(|e| now.duration_since(e.timestamp) > retention)
        {
            history.pop_front();
        }

        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
