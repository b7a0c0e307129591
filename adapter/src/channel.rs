use kernel::{
    channel::RealtimeChannel,
    model::{id::UserId, notification::Notification},
};
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::broadcast;

const ROOM_CAPACITY: usize = 64;

/// Broadcast-based channel with one lazily created room per user. Slow
/// subscribers lose old messages rather than blocking publishers; the inbox
/// table is the durable record.
#[derive(Default)]
pub struct InProcessChannel {
    rooms: RwLock<HashMap<UserId, broadcast::Sender<Notification>>>,
}

impl InProcessChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn room(&self, recipient: UserId) -> broadcast::Sender<Notification> {
        if let Some(tx) = self.rooms.read().unwrap_or_else(|e| e.into_inner()).get(&recipient) {
            return tx.clone();
        }
        let mut rooms = self.rooms.write().unwrap_or_else(|e| e.into_inner());
        rooms
            .entry(recipient)
            .or_insert_with(|| broadcast::channel(ROOM_CAPACITY).0)
            .clone()
    }
}

impl RealtimeChannel for InProcessChannel {
    fn publish(&self, recipient: UserId, notification: Notification) {
        // Err here just means nobody is listening right now.
        let _ = self.room(recipient).send(notification);
    }

    fn subscribe(&self, recipient: UserId) -> broadcast::Receiver<Notification> {
        self.room(recipient).subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::model::id::NotificationId;

    fn sample(user_id: UserId) -> Notification {
        Notification {
            notification_id: NotificationId::new(),
            user_id,
            actor_id: None,
            kind: "reservation_created".into(),
            title: None,
            message: "test".into(),
            data: None,
            read: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn delivers_only_to_the_recipients_room() {
        let channel = InProcessChannel::new();
        let alice = UserId::new();
        let bruno = UserId::new();

        let mut alice_rx = channel.subscribe(alice);
        let mut bruno_rx = channel.subscribe(bruno);

        channel.publish(alice, sample(alice));

        let received = alice_rx.recv().await.unwrap();
        assert_eq!(received.user_id, alice);
        assert!(bruno_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_no_op() {
        let channel = InProcessChannel::new();
        let user = UserId::new();
        channel.publish(user, sample(user));

        // A later subscriber starts from an empty room.
        let mut rx = channel.subscribe(user);
        assert!(rx.try_recv().is_err());
    }
}
