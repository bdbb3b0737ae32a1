//! Mailbox routing for an account record.
//!
//! Forwarding is stored as two u16 fields (forward system and forward user)
//! with two reserved values layered onto the ordinary user-number domain:
//! [`INTERNET_GATEWAY_NODE`] marks mail forwarded off-network through the
//! internet gateway, and [`MAILBOX_CLOSED`] (the maximum representable
//! value) marks a mailbox that accepts nothing at all. Business logic should
//! work with the [`MailboxState`] classification rather than comparing raw
//! numbers; `MAILBOX_CLOSED` is numerically larger than every meaningful
//! user number, so magnitude tests give wrong answers.

use serde::{Deserialize, Serialize};

/// Pseudo-node number of the internet email gateway. Also used as the
/// forward-user sentinel for internet-bound mail.
pub const INTERNET_GATEWAY_NODE: u16 = 32767;

/// Forward-user sentinel for a closed mailbox. Strictly greater than
/// [`INTERNET_GATEWAY_NODE`] and any real user number.
pub const MAILBOX_CLOSED: u16 = u16::MAX;

/// Where a subscriber's incoming mail ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailboxState {
    /// Delivered to the local mailbox.
    Local,
    /// Forwarded to another user on this or a networked system.
    ForwardedToUser(u16),
    /// Forwarded through the internet gateway.
    ForwardedToInternet,
    /// The mailbox accepts no mail.
    Closed,
}

/// Home and forwarding addresses for one subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailRoute {
    home_system: u16,
    home_user: u16,
    home_net: u16,
    forward_system: u16,
    forward_user: u16,
    forward_net: u16,
}

impl MailRoute {
    /// Classify the forwarding fields. Sentinels are matched by exact
    /// equality before any range interpretation.
    pub fn state(&self) -> MailboxState {
        match self.forward_user {
            MAILBOX_CLOSED => MailboxState::Closed,
            INTERNET_GATEWAY_NODE => MailboxState::ForwardedToInternet,
            0 => MailboxState::Local,
            user => MailboxState::ForwardedToUser(user),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.forward_user == MAILBOX_CLOSED
    }

    pub fn is_forwarded_to_internet(&self) -> bool {
        self.forward_user == INTERNET_GATEWAY_NODE
    }

    /// True only for forwarding to an ordinary user, not for the sentinels.
    pub fn is_forwarded(&self) -> bool {
        self.forward_user > 0 && self.forward_user < INTERNET_GATEWAY_NODE
    }

    /// Close the mailbox. Overrides any forwarding in effect.
    pub fn close(&mut self) {
        self.forward_system = 0;
        self.forward_user = MAILBOX_CLOSED;
    }

    /// Point the forward system at the internet gateway. This sets only the
    /// system field; the forward user is left untouched, so callers routing
    /// mail off-network must also store the gateway user via
    /// [`MailRoute::set_forward_user`] for classification to report
    /// [`MailboxState::ForwardedToInternet`].
    pub fn forward_to_internet(&mut self) {
        self.forward_system = INTERNET_GATEWAY_NODE;
    }

    /// Drop any forwarding and return to local delivery.
    pub fn clear_forward(&mut self) {
        self.forward_system = 0;
        self.forward_user = 0;
    }

    pub fn forward_system(&self) -> u16 {
        self.forward_system
    }

    pub fn set_forward_system(&mut self, n: u16) {
        self.forward_system = n;
    }

    pub fn forward_user(&self) -> u16 {
        self.forward_user
    }

    pub fn set_forward_user(&mut self, n: u16) {
        self.forward_user = n;
    }

    pub fn forward_net(&self) -> u16 {
        self.forward_net
    }

    pub fn set_forward_net(&mut self, n: u16) {
        self.forward_net = n;
    }

    pub fn home_system(&self) -> u16 {
        self.home_system
    }

    pub fn set_home_system(&mut self, n: u16) {
        self.home_system = n;
    }

    pub fn home_user(&self) -> u16 {
        self.home_user
    }

    pub fn set_home_user(&mut self, n: u16) {
        self.home_user = n;
    }

    pub fn home_net(&self) -> u16 {
        self.home_net
    }

    pub fn set_home_net(&mut self, n: u16) {
        self.home_net = n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_the_whole_domain() {
        let mut route = MailRoute::default();
        assert_eq!(route.state(), MailboxState::Local);

        route.set_forward_user(500);
        assert_eq!(route.state(), MailboxState::ForwardedToUser(500));

        route.set_forward_user(INTERNET_GATEWAY_NODE);
        assert_eq!(route.state(), MailboxState::ForwardedToInternet);

        // Closed wins even though 65535 is larger than the internet sentinel.
        route.set_forward_user(MAILBOX_CLOSED);
        assert_eq!(route.state(), MailboxState::Closed);
    }

    #[test]
    fn close_wins_from_any_prior_state() {
        for start in [0u16, 500, INTERNET_GATEWAY_NODE, MAILBOX_CLOSED] {
            let mut route = MailRoute::default();
            route.set_forward_user(start);
            route.set_forward_system(3);
            route.close();
            assert_eq!(route.state(), MailboxState::Closed);
            assert_eq!(route.forward_system(), 0);
        }
    }

    #[test]
    fn internet_forwarding_touches_only_the_system_field() {
        let mut route = MailRoute::default();
        route.forward_to_internet();
        assert_eq!(route.forward_system(), INTERNET_GATEWAY_NODE);
        assert_eq!(route.forward_user(), 0);
        // Classification still reads Local until the caller stores the
        // gateway user too.
        assert_eq!(route.state(), MailboxState::Local);
        route.set_forward_user(INTERNET_GATEWAY_NODE);
        assert_eq!(route.state(), MailboxState::ForwardedToInternet);
    }

    #[test]
    fn clear_returns_to_local() {
        let mut route = MailRoute::default();
        route.close();
        route.clear_forward();
        assert_eq!(route.state(), MailboxState::Local);
        assert!(!route.is_forwarded());
    }

    #[test]
    fn sentinels_are_not_ordinary_forwards() {
        let mut route = MailRoute::default();
        route.set_forward_user(MAILBOX_CLOSED);
        assert!(!route.is_forwarded());
        route.set_forward_user(INTERNET_GATEWAY_NODE);
        assert!(!route.is_forwarded());
        route.set_forward_user(1);
        assert!(route.is_forwarded());
    }
}
