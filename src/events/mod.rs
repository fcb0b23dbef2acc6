//! Event system for handing input from the hook thread to the UI thread.
//!
//! The global mouse hook runs on its own thread and must never touch the
//! overlay. It publishes events into an mpsc channel; the UI thread drains
//! the channel and dispatches them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │ Mouse hook  │     │   Hotkey    │
//! │  (thread)   │     │ (UI thread) │
//! └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()
//!        ▼                   ▼
//! ┌─────────────────────────────────────┐
//! │              EventBus               │
//! │            (mpsc channel)           │
//! └─────────────────┬───────────────────┘
//!                   │ drain()
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │             Dispatcher              │
//! │        (UI message loop)            │
//! └─────────────────────────────────────┘
//! ```
//!
//! There is no global bus: the entry point owns the [`EventBus`] and hands a
//! cloned [`EventPublisher`] to each producer.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::{AppEvent, MouseButton};
