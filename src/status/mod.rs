//! Status relay between the request flow and the status indicator.
//!
//! A [`StatusChannel`] is a cloneable handle. Producers call
//! [`StatusChannel::publish`]; consumers hold a [`Subscription`] for as long
//! as they want updates. Delivery is synchronous, in registration order, and
//! only reaches listeners subscribed at publish time.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Success,
    Error,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Idle => "Idle",
            Outcome::Success => "Success",
            Outcome::Error => "Error",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Outcome::Idle => "🕒",
            Outcome::Success => "✔",
            Outcome::Error => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotification {
    pub outcome: Outcome,
    pub message: String,
    pub time: DateTime<Local>,
}

impl StatusNotification {
    pub fn now(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
            time: Local::now(),
        }
    }
}

type Listener = Arc<dyn Fn(&StatusNotification) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct StatusChannel {
    listeners: Arc<Mutex<Listeners>>,
}

impl std::fmt::Debug for StatusChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusChannel")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl StatusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&StatusNotification) + Send + Sync + 'static) -> Subscription {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription {
            id,
            listeners: Arc::clone(&self.listeners),
        }
    }

    /// Delivers `notification` to every current listener.
    ///
    /// The listener list is snapshotted first, so a listener may publish or
    /// subscribe without deadlocking.
    pub fn publish(&self, notification: StatusNotification) {
        let snapshot: Vec<Listener> = {
            let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners.entries.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        tracing::debug!(
            outcome = notification.outcome.label(),
            listeners = snapshot.len(),
            "publishing status"
        );
        for listener in snapshot {
            listener(&notification);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    listeners: Arc<Mutex<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.entries.retain(|(id, _)| *id != self.id);
    }
}

/// Values a parent hands to the indicator directly.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusProps {
    pub outcome: Outcome,
    pub message: String,
    pub time: Option<DateTime<Local>>,
}

impl Default for StatusProps {
    fn default() -> Self {
        Self {
            outcome: Outcome::Idle,
            message: "Ready to test".to_string(),
            time: None,
        }
    }
}

/// What the indicator currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub outcome: Outcome,
    pub message: String,
    pub time: Option<DateTime<Local>>,
}

/// Latest status from either source; whichever update arrived last wins.
pub struct StatusIndicator {
    current: Arc<Mutex<StatusView>>,
    _subscription: Subscription,
}

impl StatusIndicator {
    pub fn new(channel: &StatusChannel, props: StatusProps) -> Self {
        let current = Arc::new(Mutex::new(StatusView {
            outcome: props.outcome,
            message: props.message,
            time: props.time,
        }));

        let sink = Arc::clone(&current);
        let subscription = channel.subscribe(move |notification| {
            let mut view = sink.lock().unwrap_or_else(PoisonError::into_inner);
            view.outcome = notification.outcome;
            view.message = notification.message.clone();
            view.time = Some(notification.time);
        });

        Self {
            current,
            _subscription: subscription,
        }
    }

    /// Applies parent-supplied values. Only fields that differ are written,
    /// and a missing time leaves the shown time alone.
    pub fn set_props(&self, props: StatusProps) {
        let mut view = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if view.outcome != props.outcome {
            view.outcome = props.outcome;
        }
        if view.message != props.message {
            view.message = props.message;
        }
        if let Some(time) = props.time {
            if view.time != Some(time) {
                view.time = Some(time);
            }
        }
    }

    pub fn snapshot(&self) -> StatusView {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
