//! # Event Bus Module
//!
//! Notification channel between the viewer engine and its command adapters.
//!
//! ## Overview
//!
//! - The engine publishes typed events while a verb runs
//! - Subscribers filter by category and receive events inline, in the order
//!   they subscribed
//! - Nothing is queued or deferred: when a verb returns, every handler has
//!   already seen every event it raised
//!
//! ## Usage
//!
//! ```rust
//! use pageview_core::event_bus::{EventBus, EventCategory, EventFilter, ViewerEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Page]),
//!     |event| {
//!         if let ViewerEvent::PageChanged { page, page_count, .. } = event {
//!             println!("Page {} of {}", page, page_count);
//!         }
//!     },
//! );
//!
//! bus.publish(ViewerEvent::PageChanged { page: 2, previous: 1, page_count: 4 }).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
