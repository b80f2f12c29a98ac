use instant::{Duration, Instant};

pub const SIGNUP_MESSAGE_DELAY: Duration = Duration::from_secs(5);
pub const UNREGISTER_MESSAGE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Identifies one `show` call. Only the ticket of the message currently on
/// screen can hide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageState {
    Hidden,
    Visible {
        message: Message,
        ticket: MessageTicket,
        hide_at: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    Hidden,
    /// A newer message replaced the one this ticket belonged to.
    Stale,
    /// The timer fired before the deadline; the message stays up.
    Early(Duration),
}

/// The single area showing the outcome of the latest user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRegion {
    state: MessageState,
    next_ticket: u64,
}

impl Default for MessageRegion {
    fn default() -> Self {
        Self {
            state: MessageState::Hidden,
            next_ticket: 0,
        }
    }
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MessageState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, MessageState::Visible { .. })
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.state {
            MessageState::Visible { message, .. } => Some(message),
            MessageState::Hidden => None,
        }
    }

    pub fn ticket(&self) -> Option<MessageTicket> {
        match &self.state {
            MessageState::Visible { ticket, .. } => Some(*ticket),
            MessageState::Hidden => None,
        }
    }

    /// Time left until the visible message may be hidden.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.state {
            MessageState::Visible { hide_at, .. } if now < *hide_at => Some(*hide_at - now),
            MessageState::Visible { .. } => Some(Duration::ZERO),
            MessageState::Hidden => None,
        }
    }

    /// Replaces whatever is displayed. Any earlier ticket becomes stale.
    pub fn show(&mut self, message: Message, hide_after: Duration, now: Instant) -> MessageTicket {
        self.next_ticket += 1;
        let ticket = MessageTicket(self.next_ticket);
        self.state = MessageState::Visible {
            message,
            ticket,
            hide_at: now + hide_after,
        };
        ticket
    }

    pub fn expire(&mut self, ticket: MessageTicket, now: Instant) -> Expiry {
        match &self.state {
            MessageState::Visible {
                ticket: current,
                hide_at,
                ..
            } if *current == ticket => {
                if now < *hide_at {
                    Expiry::Early(*hide_at - now)
                } else {
                    self.state = MessageState::Hidden;
                    Expiry::Hidden
                }
            }
            _ => Expiry::Stale,
        }
    }
}
