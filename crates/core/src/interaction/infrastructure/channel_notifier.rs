use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::interaction::domain::notifier::{Notice, Notifier};

/// Notifier that forwards notices over a channel, for UIs that render them
/// on their own update loop (toasts). Sends never block; if the receiver is
/// gone the notice is dropped, which is acceptable for fire-and-forget
/// status messages.
pub struct ChannelNotifier {
    tx: Sender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, Receiver<Notice>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, notice: Notice) {
        let _ = self.tx.send(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::domain::notifier::Severity;

    #[test]
    fn notices_arrive_in_order() {
        let (mut notifier, rx) = ChannelNotifier::new();
        notifier.notify(Notice::success("first"));
        notifier.notify(Notice::error("second"));

        let received: Vec<Notice> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].severity, Severity::Success);
        assert_eq!(received[1].message, "second");
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let (mut notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notice::info("nobody listening"));
    }
}
