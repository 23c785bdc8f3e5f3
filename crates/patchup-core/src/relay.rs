//! Worker-to-UI progress relay.
//!
//! The worker task and the UI event loop are the only two execution contexts
//! in the updater, and this channel is the only sanctioned way to cross the
//! boundary: the worker never touches presentation state directly. Delivery
//! is asynchronous and strictly FIFO; the relay never coalesces or drops
//! events, so the channel is unbounded and emission never blocks on the UI.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::widgets::{Label, ProgressBar};

/// One event crossing the worker/UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The named label should display `text`.
    Label {
        /// Target label widget.
        label: Label,
        /// Text to display.
        text: String,
    },
    /// The named progress bar should display `value`.
    ///
    /// `value` is 0-100 by convention; the relay does not enforce the range.
    /// Clamping is the consumer's concern.
    Progress {
        /// Target progress bar widget.
        bar: ProgressBar,
        /// Percent complete.
        value: u8,
    },
}

/// Receiving end of the relay, consumed from the UI event loop.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Worker-side handle for emitting UI events.
#[derive(Debug, Clone)]
pub struct ProgressRelay {
    tx: mpsc::UnboundedSender<UiEvent>,
}

/// Creates a relay pair: the worker keeps the `ProgressRelay`, the UI event
/// loop drains the `UiEventReceiver`. Single producer, single consumer.
pub fn channel() -> (ProgressRelay, UiEventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressRelay { tx }, rx)
}

impl ProgressRelay {
    /// Asks the UI to log `message` in the given label.
    pub fn log(&self, label: Label, message: impl Into<String>) {
        self.send(UiEvent::Label {
            label,
            text: message.into(),
        });
    }

    /// Asks the UI to show `value` in the given progress bar.
    pub fn progress(&self, bar: ProgressBar, value: u8) {
        self.send(UiEvent::Progress { bar, value });
    }

    fn send(&self, event: UiEvent) {
        // A closed receiver means the UI is shutting down; nothing left to
        // update, so the event is discarded.
        if self.tx.send(event).is_err() {
            tracing::debug!("ui receiver dropped; event discarded");
        }
    }
}
