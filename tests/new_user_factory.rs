//! Account factory behavior, including seeds loaded from the board config.

use std::io::Write;

use userrec::account::factory::{self, AccountError, NewUserSeed};
use userrec::config::NewUserDefaults;
use userrec::flags::RestrictFlags;

fn good_seed() -> NewUserSeed {
    NewUserSeed {
        security_level: 10,
        download_security_level: 0,
        restrictions: 0,
        gold: 1.0,
        ansi_colors: vec![7, 11, 14, 13, 31, 10, 12, 9, 5, 3],
        mono_colors: vec![7; 10],
    }
}

#[test]
fn create_is_all_or_nothing() {
    let mut bad = good_seed();
    bad.ansi_colors = vec![7; 12];
    match factory::create(&bad) {
        Err(AccountError::BadPalette { expected, got }) => {
            assert_eq!(expected, 10);
            assert_eq!(got, 12);
        }
        Ok(_) => panic!("malformed palette must not produce a record"),
    }
}

#[test]
fn created_record_reads_back_its_seed() {
    let mut seed = good_seed();
    seed.restrictions = (RestrictFlags::POST | RestrictFlags::EMAIL).bits();
    let rec = factory::create(&seed).expect("create");
    assert!(rec.has_restriction_flag(RestrictFlags::POST));
    assert!(rec.has_restriction_flag(RestrictFlags::EMAIL));
    assert!(!rec.has_restriction_flag(RestrictFlags::CHAT));
    assert_eq!(rec.colors().ansi_color(4), 31);
    assert_eq!(rec.gold(), 1.0);
}

#[test]
fn toml_defaults_seed_the_same_record_as_hand_built_ones() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[newuser]
security_level = 10
gold = 1.0
ansi_colors = [7, 11, 14, 13, 31, 10, 12, 9, 5, 3]
"#
    )?;

    let defaults = NewUserDefaults::load(file.path())?;
    let from_toml = factory::create(&defaults.seed())?;
    let mut hand = good_seed();
    hand.gold = 1.0;
    let from_hand = factory::create(&hand)?;
    assert_eq!(from_toml, from_hand);
    Ok(())
}

#[test]
fn config_without_newuser_table_uses_stock_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "# board config with no newuser table")?;
    let defaults = NewUserDefaults::load(file.path())?;
    let rec = factory::create(&defaults.seed())?;
    assert_eq!(rec.security_level(), 10);
    assert_eq!(rec.restrictions(), RestrictFlags::empty());
    Ok(())
}
