//! The record survives the binary codec used by the persistence layer.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use userrec::flags::{LifecycleFlags, StatusFlags};
use userrec::AccountRecord;

#[test]
fn bincode_round_trip_preserves_the_contract_fields() -> anyhow::Result<()> {
    let mut rec = AccountRecord::default();
    rec.set_name("Random Caller");
    rec.set_real_name("R. Caller");
    rec.set_password("SECRET");
    rec.set_gender_byte(b'F');
    rec.set_birthday_mdy(12, 1, 1975);
    rec.set_status_flag(StatusFlags::ANSI | StatusFlags::COLOR);
    rec.set_lifecycle_flag(LifecycleFlags::INACTIVE);
    rec.ar_mut().set(0x0003);
    rec.set_screen_width(132);
    rec.add_time_on(Duration::from_secs(3600));
    rec.add_extra_time(Duration::from_secs(600));
    rec.mail_mut().set_forward_user(500);
    rec.set_last_address(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)));
    rec.set_last_logon_time(Utc.with_ymd_and_hms(2024, 5, 1, 3, 4, 5).unwrap());
    rec.colors_mut().set_ansi_color(2, 11);

    let bytes = bincode::serialize(&rec)?;
    let back: AccountRecord = bincode::deserialize(&bytes)?;
    assert_eq!(back, rec);

    // Derived behavior holds on the decoded copy too.
    assert_eq!(back.screen_width(), 132);
    assert_eq!(back.effective_color(2), 11);
    assert!(back.has_ar(0));
    assert_eq!(back.banktime_minutes(), 10);
    Ok(())
}
