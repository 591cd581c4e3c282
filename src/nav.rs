use crate::config::Config;
use std::time::{Duration, Instant};
use tracing::debug;

/// Hover-driven account dropdown.
///
/// Timers are plain deadlines checked by [`AccountMenu::tick`]; cancelling
/// one means dropping the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    /// Opens once the deadline passes
    Opening { at: Instant },
    /// Closes once `closing_at` passes, if set
    Open { closing_at: Option<Instant> },
}

#[derive(Debug, Clone)]
pub struct AccountMenu {
    state: MenuState,
    open_delay: Duration,
    close_delay: Duration,
}

impl AccountMenu {
    pub fn new(open_delay: Duration, close_delay: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            open_delay,
            close_delay,
        }
    }

    /// Use the configured hover delays.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.menu_open_delay, config.menu_close_delay)
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    pub fn pointer_enter(&mut self, now: Instant) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Opening {
                at: now + self.open_delay,
            },
            MenuState::Open { .. } => MenuState::Open { closing_at: None },
            opening => opening,
        };
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.state = match self.state {
            MenuState::Opening { .. } => MenuState::Closed,
            MenuState::Open { closing_at: None } => MenuState::Open {
                closing_at: Some(now + self.close_delay),
            },
            other => other,
        };
    }

    /// Open or close immediately, dropping any pending timer
    pub fn click(&mut self) {
        self.state = if self.is_open() {
            MenuState::Closed
        } else {
            MenuState::Open { closing_at: None }
        };
    }

    /// Fire whichever timer is due
    pub fn tick(&mut self, now: Instant) {
        let next = match self.state {
            MenuState::Opening { at } if now >= at => MenuState::Open { closing_at: None },
            MenuState::Open { closing_at: Some(at) } if now >= at => MenuState::Closed,
            other => other,
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "Account menu transition");
            self.state = next;
        }
    }
}

/// Collapsible navigation on narrow screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
