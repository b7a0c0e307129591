use crate::model::{id::UserId, notification::Notification};
use tokio::sync::broadcast;

/// Realtime push port, one room per user. Injected through the registry so
/// the reservation workflow can run without a live transport.
///
/// Delivery is at-most-once and best-effort: publishing to a room nobody is
/// subscribed to drops the message, and the persisted notification remains
/// the source of truth for the inbox.
pub trait RealtimeChannel: Send + Sync {
    fn publish(&self, recipient: UserId, notification: Notification);
    fn subscribe(&self, recipient: UserId) -> broadcast::Receiver<Notification>;
}
