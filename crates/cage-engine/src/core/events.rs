//! Engine event subscriptions.
//!
//! Games register interest in a [`Topic`] and get back a [`SubscriptionId`].
//! The runner publishes engine events to every live subscription of the
//! matching topic, in registration order. The bus belongs to one
//! `EngineContext`, so tearing a world down drops every subscription with it.

use crate::core::physics::CollisionPair;

/// What a subscription listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Fired once after every physics step.
    AfterUpdate,
    /// Fired for every contact that started during a physics step.
    CollisionStart,
}

/// An engine event delivered to a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    AfterUpdate,
    CollisionStart(CollisionPair),
}

impl EngineEvent {
    pub fn topic(&self) -> Topic {
        match self {
            EngineEvent::AfterUpdate => Topic::AfterUpdate,
            EngineEvent::CollisionStart(_) => Topic::CollisionStart,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

/// Registry of live subscriptions for one world lifetime.
pub struct EventBus {
    subscriptions: Vec<(SubscriptionId, Topic)>,
    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Register interest in `topic`.
    pub fn subscribe(&mut self, topic: Topic) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push((id, topic));
        id
    }

    /// Live subscriptions for `topic`, in registration order.
    pub fn subscribers(&self, topic: Topic) -> Vec<SubscriptionId> {
        self.subscriptions
            .iter()
            .filter(|(_, t)| *t == topic)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of live subscriptions across all topics.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
