//! Flag registers carried by an account record.
//!
//! A subscriber record holds several independent bitmask domains: lifecycle,
//! exemptions, restrictions, system status, and the two access-rights
//! registers (ar/dar). Each domain is its own newtype so a restriction bit
//! can never be applied to the status register by accident. The four plain
//! registers share the usual set/clear/toggle/has contract; the
//! access-rights registers additionally treat an empty requirement mask as
//! always satisfied.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Lifecycle bits. Deleted and inactive are independent: a record may carry
/// both, either, or neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleFlags(u8);
bitflags! {
    impl LifecycleFlags: u8 {
        const DELETED = 0x01;
        const INACTIVE = 0x02;
    }
}

/// Exemptions from sysop-imposed limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptFlags(u8);
bitflags! {
    impl ExemptFlags: u8 {
        const RATIO = 0x01;
        const TIME = 0x02;
        const POST = 0x04;
        const ALL = 0x08;
        const AUTO_DELETE = 0x10;
    }
}

/// Per-subscriber restrictions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictFlags(u16);
bitflags! {
    impl RestrictFlags: u16 {
        const LOGON = 0x0001;
        const CHAT = 0x0002;
        const VALIDATE = 0x0004;
        const AUTOMESSAGE = 0x0008;
        const ANONYMOUS = 0x0010;
        const POST = 0x0020;
        const EMAIL = 0x0040;
        const VOTE = 0x0080;
        const MULTI_NODE_CHAT = 0x0100;
        const NET = 0x0200;
        const UPLOAD = 0x0400;
    }
}

/// Terminal capabilities and session preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags(u32);
bitflags! {
    impl StatusFlags: u32 {
        const ANSI = 0x0000_0001;
        const COLOR = 0x0000_0002;
        const MUSIC = 0x0000_0004;
        const PAUSE_ON_PAGE = 0x0000_0008;
        const EXPERT = 0x0000_0010;
        const SHORT_MESSAGE_WAITING = 0x0000_0020;
        const FULL_SCREEN = 0x0000_0040;
        const FILE_NEW_SCAN = 0x0000_0080;
        const EXTRA_COLOR = 0x0000_0100;
        const CLEAR_SCREEN = 0x0000_0200;
        const SHOW_CONTROL_CODES = 0x0000_0400;
        const CONFERENCING = 0x0000_1000;
        const NO_CHAT = 0x0000_2000;
        const NO_NODE_MESSAGES = 0x0000_4000;
        const FULL_SCREEN_READER = 0x0000_8000;
        const AUTO_QUOTE = 0x0002_0000;
        const TWENTY_FOUR_HOUR_CLOCK = 0x0004_0000;
        const MSG_PRIORITY = 0x0008_0000;
    }
}

/// One access-rights register (ar or dar).
///
/// Unlike the other registers, a requirement mask of zero is defined as
/// universally satisfied: an area that requires nothing admits everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessFlags(u16);

impl AccessFlags {
    pub const fn from_bits(bits: u16) -> Self {
        AccessFlags(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn set(&mut self, mask: u16) {
        self.0 |= mask;
    }

    pub fn clear(&mut self, mask: u16) {
        self.0 &= !mask;
    }

    pub fn toggle(&mut self, mask: u16) {
        self.0 ^= mask;
    }

    /// True when any bit of `mask` is granted, or when `mask` is empty.
    pub fn has(self, mask: u16) -> bool {
        if mask == 0 {
            return true;
        }
        self.0 & mask != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        let mut status = StatusFlags::ANSI | StatusFlags::PAUSE_ON_PAGE;
        let before = status.intersects(StatusFlags::EXPERT);
        status.toggle(StatusFlags::EXPERT);
        status.toggle(StatusFlags::EXPERT);
        assert_eq!(status.intersects(StatusFlags::EXPERT), before);

        let mut restrict = RestrictFlags::default();
        restrict.toggle(RestrictFlags::POST);
        assert!(restrict.intersects(RestrictFlags::POST));
        restrict.toggle(RestrictFlags::POST);
        assert!(!restrict.intersects(RestrictFlags::POST));
    }

    #[test]
    fn set_and_clear_are_idempotent() {
        let mut exempt = ExemptFlags::default();
        exempt.insert(ExemptFlags::RATIO);
        exempt.insert(ExemptFlags::RATIO);
        assert_eq!(exempt, ExemptFlags::RATIO);
        exempt.remove(ExemptFlags::RATIO);
        exempt.remove(ExemptFlags::RATIO);
        assert_eq!(exempt, ExemptFlags::default());
    }

    #[test]
    fn empty_query_is_false_on_plain_registers() {
        let life = LifecycleFlags::DELETED | LifecycleFlags::INACTIVE;
        assert!(!life.intersects(LifecycleFlags::empty()));
        let status = StatusFlags::ANSI;
        assert!(!status.intersects(StatusFlags::empty()));
    }

    #[test]
    fn deleted_and_inactive_are_independent() {
        let mut life = LifecycleFlags::default();
        life.insert(LifecycleFlags::DELETED);
        assert!(life.intersects(LifecycleFlags::DELETED));
        assert!(!life.intersects(LifecycleFlags::INACTIVE));
        life.insert(LifecycleFlags::INACTIVE);
        assert!(life.intersects(LifecycleFlags::DELETED));
        assert!(life.intersects(LifecycleFlags::INACTIVE));
    }

    #[test]
    fn access_rights_empty_mask_always_satisfied() {
        let ar = AccessFlags::default();
        assert!(ar.has(0));
        assert!(!ar.has(0x0001));

        let mut dar = AccessFlags::from_bits(0x0004);
        assert!(dar.has(0));
        assert!(dar.has(0x0004));
        dar.toggle(0x0004);
        assert!(!dar.has(0x0004));
        assert!(dar.has(0));
    }
}
