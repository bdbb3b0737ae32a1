//! All-or-nothing construction of new account records.
//!
//! Sign-up hands the factory a seed (access levels, restriction mask,
//! starting balance, the two palettes) and receives either a fully formed
//! record or an error. A failed create leaves nothing behind: the record is
//! built locally and only returned on success, so no caller can ever
//! observe a half-initialized subscriber.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colors::{ColorProfile, PALETTE_SLOTS};
use crate::flags::RestrictFlags;

use super::AccountRecord;

/// Errors from account construction, the one fallible operation in this
/// crate.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("palette must have exactly {expected} slots, got {got}")]
    BadPalette { expected: usize, got: usize },
}

/// Seed parameters for a new subscriber. Everything not named here starts
/// zeroed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserSeed {
    pub security_level: u8,
    pub download_security_level: u8,
    pub restrictions: u16,
    pub gold: f32,
    pub ansi_colors: Vec<u8>,
    pub mono_colors: Vec<u8>,
}

fn palette(slots: &[u8]) -> Result<[u8; PALETTE_SLOTS], AccountError> {
    <[u8; PALETTE_SLOTS]>::try_from(slots).map_err(|_| AccountError::BadPalette {
        expected: PALETTE_SLOTS,
        got: slots.len(),
    })
}

/// Build a new record from the seed. Fails atomically: both palettes are
/// validated before any record exists.
pub fn create(seed: &NewUserSeed) -> Result<AccountRecord, AccountError> {
    let ansi = palette(&seed.ansi_colors)?;
    let mono = palette(&seed.mono_colors)?;

    let mut rec = AccountRecord::default();
    rec.set_security_level(seed.security_level);
    rec.set_download_security_level(seed.download_security_level);
    rec.set_restrictions(RestrictFlags::from_bits_retain(seed.restrictions));
    rec.set_gold(seed.gold);
    rec.set_colors(ColorProfile::new(ansi, mono));
    // New users get prompted for gender; hotkeys default on via the zeroed
    // field.
    rec.set_gender_byte(b'N');
    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Gender;
    use crate::mailroute::MailboxState;

    fn seed() -> NewUserSeed {
        NewUserSeed {
            security_level: 10,
            download_security_level: 20,
            restrictions: 0x0020, // no posting until validated
            gold: 5.0,
            ansi_colors: vec![7, 11, 14, 5, 31, 2, 12, 9, 6, 3],
            mono_colors: vec![7; 10],
        }
    }

    #[test]
    fn create_seeds_and_zeroes() {
        let rec = create(&seed()).expect("create");
        assert_eq!(rec.security_level(), 10);
        assert_eq!(rec.download_security_level(), 20);
        assert!(rec.has_restriction_flag(RestrictFlags::POST));
        assert_eq!(rec.gold(), 5.0);
        assert_eq!(rec.colors().ansi_color(1), 11);
        assert_eq!(rec.gender(), Gender::Unknown);
        assert!(rec.hotkeys());
        // Unseeded fields are zero.
        assert_eq!(rec.logons(), 0);
        assert_eq!(rec.name(), "");
        assert!(!rec.is_deleted());
        assert_eq!(rec.mailbox_state(), MailboxState::Local);
    }

    #[test]
    fn short_palette_fails_without_a_record() {
        let mut bad = seed();
        bad.ansi_colors.truncate(4);
        let err = create(&bad);
        assert!(matches!(
            err,
            Err(AccountError::BadPalette { expected: 10, got: 4 })
        ));
    }

    #[test]
    fn second_palette_is_validated_too() {
        let mut bad = seed();
        bad.mono_colors.push(7);
        assert!(create(&bad).is_err());
    }
}
