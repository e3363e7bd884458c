//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use arena_core::{GameEvent, Team, Timestamp};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Ability casts, rejected intents, kills and respawns
    Combat,
    /// Level-ups and reward offers/choices
    Progression,
    /// Tick boundaries and match end
    Match,
}

/// Event wrapper that carries the game clock and typed payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// An event raised inside the tick ending at `game_time`.
    Game {
        game_time: Timestamp,
        event: GameEvent,
    },
    /// Published after every tick, once all of its game events.
    TickCompleted { game_time: Timestamp },
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Game { event, .. } => match event {
                GameEvent::AbilityUsed { .. }
                | GameEvent::IntentRejected { .. }
                | GameEvent::CombatantKilled { .. }
                | GameEvent::HeroRespawned { .. } => Topic::Combat,
                GameEvent::LevelUp { .. }
                | GameEvent::RewardOffered { .. }
                | GameEvent::RewardApplied { .. } => Topic::Progression,
                GameEvent::MatchWon { .. } => Topic::Match,
            },
            Event::TickCompleted { .. } => Topic::Match,
        }
    }

    /// Winning team, if this event ended the match.
    pub fn winner(&self) -> Option<Team> {
        match self {
            Event::Game {
                event: GameEvent::MatchWon { team },
                ..
            } => Some(*team),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Channels {
    combat: broadcast::Sender<Event>,
    progression: broadcast::Sender<Event>,
    matches: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Combat => &self.combat,
            Topic::Progression => &self.progression,
            Topic::Match => &self.matches,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks; a receiver that falls
/// more than the buffer size behind observes `RecvError::Lagged`.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                combat: broadcast::channel(capacity).0,
                progression: broadcast::channel(capacity).0,
                matches: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}, event dropped", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{AbilityKind, EntityId, Position};

    #[test]
    fn events_are_routed_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut combat = bus.subscribe(Topic::Combat);
        let mut progression = bus.subscribe(Topic::Progression);

        let cast = Event::Game {
            game_time: 50,
            event: GameEvent::AbilityUsed {
                hero: EntityId(1),
                ability: AbilityKind::Sniper,
                target: Position::new(10.0, 10.0),
            },
        };
        bus.publish(cast.clone());
        bus.publish(Event::TickCompleted { game_time: 50 });

        assert_eq!(combat.try_recv().unwrap(), cast);
        assert!(combat.try_recv().is_err());
        assert!(progression.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(Event::TickCompleted { game_time: 0 });
        assert_eq!(bus.subscriber_count(Topic::Match), 0);
    }

    #[test]
    fn match_won_carries_winner() {
        let event = Event::Game {
            game_time: 9_000,
            event: GameEvent::MatchWon { team: Team::Red },
        };
        assert_eq!(event.topic(), Topic::Match);
        assert_eq!(event.winner(), Some(Team::Red));
        assert_eq!(Event::TickCompleted { game_time: 1 }.winner(), None);
    }
}
