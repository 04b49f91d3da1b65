//! Status Message Slot
//!
//! The message area shows at most one line. Every `show` hands out a new
//! ticket; an expiry only clears the line if it carries the current ticket,
//! so the timer of a superseded message can never erase a newer one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn color(self) -> &'static str {
        match self {
            MessageKind::Success => "green",
            MessageKind::Error => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageSlot {
    generation: u64,
    current: Option<StatusMessage>,
}

impl MessageSlot {
    pub fn show(&mut self, text: impl Into<String>, kind: MessageKind) -> Ticket {
        self.generation += 1;
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
        });
        Ticket(self.generation)
    }

    /// Clear the message if `ticket` is still the latest. Returns whether it cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}
