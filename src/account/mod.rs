//! The account record: the persisted per-subscriber aggregate.
//!
//! Every subsystem of the board (login, messaging, transfers, menus) reads
//! and mutates subscribers through this one structure, so its invariants
//! live here and nowhere else: flag registers never alias, routing sentinels
//! are classified not compared, counters saturate instead of wrapping, and
//! text fields truncate to their storage width instead of rejecting input.
//!
//! The record performs no I/O and no locking. Exactly one session owns a
//! record at a time; persistence and cross-session coordination happen in
//! the layers that load and save it.

pub mod factory;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

use crate::colors::ColorProfile;
use crate::flags::{AccessFlags, ExemptFlags, LifecycleFlags, RestrictFlags, StatusFlags};
use crate::mailroute::{MailRoute, MailboxState};
use crate::timeledger::TimeLedger;

/// Storage widths of the fixed-width text fields, in bytes.
pub const NAME_LEN: usize = 30;
pub const REAL_NAME_LEN: usize = 20;
pub const CALLSIGN_LEN: usize = 6;
pub const PHONE_LEN: usize = 12;
pub const STREET_LEN: usize = 30;
pub const CITY_LEN: usize = 30;
pub const STATE_LEN: usize = 2;
pub const COUNTRY_LEN: usize = 3;
pub const ZIPCODE_LEN: usize = 10;
pub const PASSWORD_LEN: usize = 8;
pub const EMAIL_LEN: usize = 56;
pub const NOTE_LEN: usize = 60;
pub const MENU_SET_LEN: usize = 8;
pub const DATE_STR_LEN: usize = 8;
pub const MACRO_LEN: usize = 80;

/// Number of keyboard macro slots.
pub const MACRO_SLOTS: usize = 5;

/// Number of voting-booth answer slots.
pub const VOTE_SLOTS: usize = 20;

/// Effective screen geometry substituted when the stored value is 0.
pub const DEFAULT_SCREEN_WIDTH: u8 = 80;
pub const DEFAULT_SCREEN_HEIGHT: u8 = 25;

/// Hotkeys preference values. On is the zero/default state.
pub const HOTKEYS_ON: u8 = 0;
pub const HOTKEYS_OFF: u8 = 1;

/// Normalized gender, derived from the stored byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Stored byte `'N'`: not yet answered, prompt again.
    Unknown,
    /// Stored byte `'F'`.
    Female,
    /// Any other stored byte, garbage included.
    Male,
}

/// Truncate to at most `max` bytes on a char boundary. Oversized input is
/// a normal event at this layer; it is logged, never rejected.
fn fit(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    log::debug!("truncating {} byte field value to {} bytes", s.len(), end);
    s[..end].to_string()
}

/// One subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    // Identity
    name: String,
    real_name: String,
    callsign: String,
    voice_phone: String,
    data_phone: String,
    street: String,
    city: String,
    state: String,
    country: String,
    zipcode: String,
    password: String,
    email: String,
    note: String,
    #[serde(default)]
    macros: [String; MACRO_SLOTS],
    gender_byte: u8,
    birth_month: u8,
    birth_day: u8,
    /// Years since 1900.
    birth_year_offset: u8,

    // Flag registers
    lifecycle: LifecycleFlags,
    exemptions: ExemptFlags,
    restrictions: RestrictFlags,
    status: StatusFlags,
    ar: AccessFlags,
    dar: AccessFlags,

    // Access levels
    security_level: u8,
    download_security_level: u8,

    // Statistics
    logons: u16,
    calls_today: u8,
    illegal_logons: u8,
    messages_posted: u16,
    posts_today: u16,
    email_sent: u16,
    email_today: u16,
    feedback_sent: u16,
    feedback_today: u16,
    email_waiting: u8,
    email_net: u16,
    posts_net: u16,
    uploads: u16,
    downloads: u16,
    uploaded_k: u32,
    downloaded_k: u32,
    messages_read: u32,
    deleted_posts: u16,
    chains_run: u16,
    gfiles_read: u16,
    points: u16,
    last_bps: u16,
    registration_num: u32,
    gold: f32,
    #[serde(default)]
    votes: [u8; VOTE_SLOTS],

    // Time accounting
    ledger: TimeLedger,

    // Mail routing
    mail: MailRoute,

    // Color preference
    colors: ColorProfile,

    // Preferences
    screen_width: u8,
    screen_height: u8,
    language: u8,
    computer_type: i8,
    default_protocol: u8,
    default_editor: u8,
    optional_val: u8,
    extended_desc_lines: u8,
    full_file_descriptions: bool,
    hot_keys: u8,
    menu_set: String,
    last_msg_conf: u16,
    last_msg_area: u16,
    last_file_conf: u16,
    last_file_area: u16,

    // Presence
    first_on: String,
    last_on: String,
    last_logon_time: Option<DateTime<Utc>>,
    new_scan_time: Option<DateTime<Utc>>,
    last_address: Option<IpAddr>,
}

impl AccountRecord {
    // ----- identity -------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, s: &str) {
        self.name = fit(s, NAME_LEN);
    }

    pub fn real_name(&self) -> &str {
        &self.real_name
    }

    pub fn set_real_name(&mut self, s: &str) {
        self.real_name = fit(s, REAL_NAME_LEN);
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    pub fn set_callsign(&mut self, s: &str) {
        self.callsign = fit(s, CALLSIGN_LEN);
    }

    pub fn voice_phone(&self) -> &str {
        &self.voice_phone
    }

    pub fn set_voice_phone(&mut self, s: &str) {
        self.voice_phone = fit(s, PHONE_LEN);
    }

    pub fn data_phone(&self) -> &str {
        &self.data_phone
    }

    pub fn set_data_phone(&mut self, s: &str) {
        self.data_phone = fit(s, PHONE_LEN);
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn set_street(&mut self, s: &str) {
        self.street = fit(s, STREET_LEN);
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, s: &str) {
        self.city = fit(s, CITY_LEN);
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, s: &str) {
        self.state = fit(s, STATE_LEN);
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, s: &str) {
        self.country = fit(s, COUNTRY_LEN);
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn set_zipcode(&mut self, s: &str) {
        self.zipcode = fit(s, ZIPCODE_LEN);
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, s: &str) {
        self.password = fit(s, PASSWORD_LEN);
    }

    /// Replace the password with a random uppercase-alphanumeric one of the
    /// full storage width.
    pub fn randomize_password<R: Rng>(&mut self, rng: &mut R) {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        self.password = (0..PASSWORD_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
    }

    pub fn email_address(&self) -> &str {
        &self.email
    }

    pub fn set_email_address(&mut self, s: &str) {
        self.email = fit(s, EMAIL_LEN);
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, s: &str) {
        self.note = fit(s, NOTE_LEN);
    }

    /// Keyboard macro text, empty for an out-of-range slot.
    pub fn macro_text(&self, slot: usize) -> &str {
        self.macros.get(slot).map(String::as_str).unwrap_or("")
    }

    pub fn set_macro_text(&mut self, slot: usize, s: &str) {
        match self.macros.get_mut(slot) {
            Some(m) => *m = fit(s, MACRO_LEN),
            None => log::warn!("ignoring macro write to slot {slot}"),
        }
    }

    /// Three-way gender: `'N'` is "unknown, prompt again", `'F'` is female,
    /// and every other stored byte normalizes to male.
    pub fn gender(&self) -> Gender {
        match self.gender_byte {
            b'N' => Gender::Unknown,
            b'F' => Gender::Female,
            _ => Gender::Male,
        }
    }

    pub fn set_gender_byte(&mut self, b: u8) {
        self.gender_byte = b;
    }

    /// Birthday from month (1-12), day (1-31) and full year.
    pub fn set_birthday_mdy(&mut self, month: u8, day: u8, year: u16) {
        self.birth_month = month;
        self.birth_day = day;
        self.birth_year_offset = u8::try_from(year.saturating_sub(1900)).unwrap_or(u8::MAX);
    }

    pub fn birthday_month(&self) -> u8 {
        self.birth_month
    }

    pub fn birthday_day(&self) -> u8 {
        self.birth_day
    }

    pub fn birthday_year(&self) -> u16 {
        1900 + u16::from(self.birth_year_offset)
    }

    /// `mm/dd/yy` rendering of the birthday.
    pub fn birthday_mmddyy(&self) -> String {
        format!(
            "{:02}/{:02}/{:02}",
            self.birth_month,
            self.birth_day,
            self.birthday_year() % 100
        )
    }

    /// Age in whole years at `now`, 0 when the stored birthday is not a
    /// real calendar date.
    pub fn age(&self, now: DateTime<Utc>) -> u8 {
        let birth = match NaiveDate::from_ymd_opt(
            i32::from(self.birthday_year()),
            u32::from(self.birth_month),
            u32::from(self.birth_day),
        ) {
            Some(d) => d,
            None => return 0,
        };
        let today = now.date_naive();
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u8::try_from(years).unwrap_or(0)
    }

    // ----- flag registers -------------------------------------------------

    pub fn lifecycle(&self) -> LifecycleFlags {
        self.lifecycle
    }

    pub fn set_lifecycle_flag(&mut self, flag: LifecycleFlags) {
        self.lifecycle.insert(flag);
    }

    pub fn clear_lifecycle_flag(&mut self, flag: LifecycleFlags) {
        self.lifecycle.remove(flag);
    }

    pub fn toggle_lifecycle_flag(&mut self, flag: LifecycleFlags) {
        self.lifecycle.toggle(flag);
    }

    pub fn is_deleted(&self) -> bool {
        self.lifecycle.intersects(LifecycleFlags::DELETED)
    }

    pub fn is_inactive(&self) -> bool {
        self.lifecycle.intersects(LifecycleFlags::INACTIVE)
    }

    pub fn exemptions(&self) -> ExemptFlags {
        self.exemptions
    }

    pub fn set_exempt_flag(&mut self, flag: ExemptFlags) {
        self.exemptions.insert(flag);
    }

    pub fn clear_exempt_flag(&mut self, flag: ExemptFlags) {
        self.exemptions.remove(flag);
    }

    pub fn toggle_exempt_flag(&mut self, flag: ExemptFlags) {
        self.exemptions.toggle(flag);
    }

    pub fn has_exempt_flag(&self, flag: ExemptFlags) -> bool {
        self.exemptions.intersects(flag)
    }

    pub fn restrictions(&self) -> RestrictFlags {
        self.restrictions
    }

    pub fn set_restrictions(&mut self, flags: RestrictFlags) {
        self.restrictions = flags;
    }

    pub fn set_restriction_flag(&mut self, flag: RestrictFlags) {
        self.restrictions.insert(flag);
    }

    pub fn clear_restriction_flag(&mut self, flag: RestrictFlags) {
        self.restrictions.remove(flag);
    }

    pub fn toggle_restriction_flag(&mut self, flag: RestrictFlags) {
        self.restrictions.toggle(flag);
    }

    pub fn has_restriction_flag(&self, flag: RestrictFlags) -> bool {
        self.restrictions.intersects(flag)
    }

    pub fn status(&self) -> StatusFlags {
        self.status
    }

    pub fn set_status_flag(&mut self, flag: StatusFlags) {
        self.status.insert(flag);
    }

    pub fn clear_status_flag(&mut self, flag: StatusFlags) {
        self.status.remove(flag);
    }

    pub fn toggle_status_flag(&mut self, flag: StatusFlags) {
        self.status.toggle(flag);
    }

    pub fn has_status_flag(&self, flag: StatusFlags) -> bool {
        self.status.intersects(flag)
    }

    pub fn has_ansi(&self) -> bool {
        self.has_status_flag(StatusFlags::ANSI)
    }

    pub fn has_color(&self) -> bool {
        self.has_status_flag(StatusFlags::COLOR)
    }

    pub fn is_expert(&self) -> bool {
        self.has_status_flag(StatusFlags::EXPERT)
    }

    pub fn ar(&self) -> AccessFlags {
        self.ar
    }

    pub fn ar_mut(&mut self) -> &mut AccessFlags {
        &mut self.ar
    }

    /// True when the ar register satisfies `mask`; an empty mask is always
    /// satisfied.
    pub fn has_ar(&self, mask: u16) -> bool {
        self.ar.has(mask)
    }

    pub fn dar(&self) -> AccessFlags {
        self.dar
    }

    pub fn dar_mut(&mut self) -> &mut AccessFlags {
        &mut self.dar
    }

    pub fn has_dar(&self, mask: u16) -> bool {
        self.dar.has(mask)
    }

    // ----- access levels --------------------------------------------------

    pub fn security_level(&self) -> u8 {
        self.security_level
    }

    pub fn set_security_level(&mut self, n: u8) {
        self.security_level = n;
    }

    pub fn download_security_level(&self) -> u8 {
        self.download_security_level
    }

    pub fn set_download_security_level(&mut self, n: u8) {
        self.download_security_level = n;
    }

    // ----- statistics -----------------------------------------------------

    pub fn logons(&self) -> u16 {
        self.logons
    }

    pub fn set_logons(&mut self, n: u16) {
        self.logons = n;
    }

    pub fn calls_today(&self) -> u8 {
        self.calls_today
    }

    pub fn illegal_logons(&self) -> u8 {
        self.illegal_logons
    }

    pub fn set_illegal_logons(&mut self, n: u8) {
        self.illegal_logons = n;
    }

    /// Saturates at the storage maximum; a wrap here would erase the very
    /// evidence the counter exists to keep.
    pub fn increment_illegal_logons(&mut self) {
        self.illegal_logons = self.illegal_logons.saturating_add(1);
    }

    pub fn messages_posted(&self) -> u16 {
        self.messages_posted
    }

    pub fn set_messages_posted(&mut self, n: u16) {
        self.messages_posted = n;
    }

    pub fn posts_today(&self) -> u16 {
        self.posts_today
    }

    pub fn set_posts_today(&mut self, n: u16) {
        self.posts_today = n;
    }

    pub fn email_sent(&self) -> u16 {
        self.email_sent
    }

    pub fn set_email_sent(&mut self, n: u16) {
        self.email_sent = n;
    }

    pub fn email_today(&self) -> u16 {
        self.email_today
    }

    pub fn set_email_today(&mut self, n: u16) {
        self.email_today = n;
    }

    pub fn feedback_sent(&self) -> u16 {
        self.feedback_sent
    }

    pub fn set_feedback_sent(&mut self, n: u16) {
        self.feedback_sent = n;
    }

    pub fn feedback_today(&self) -> u16 {
        self.feedback_today
    }

    pub fn set_feedback_today(&mut self, n: u16) {
        self.feedback_today = n;
    }

    pub fn email_waiting(&self) -> u8 {
        self.email_waiting
    }

    pub fn set_email_waiting(&mut self, n: u8) {
        self.email_waiting = n;
    }

    /// Email sent over the network, as opposed to locally.
    pub fn email_net(&self) -> u16 {
        self.email_net
    }

    pub fn set_email_net(&mut self, n: u16) {
        self.email_net = n;
    }

    /// Posts sent over the network.
    pub fn posts_net(&self) -> u16 {
        self.posts_net
    }

    pub fn set_posts_net(&mut self, n: u16) {
        self.posts_net = n;
    }

    pub fn uploads(&self) -> u16 {
        self.uploads
    }

    pub fn set_uploads(&mut self, n: u16) {
        self.uploads = n;
    }

    pub fn increment_uploads(&mut self) {
        self.uploads = self.uploads.saturating_add(1);
    }

    pub fn decrement_uploads(&mut self) {
        self.uploads = self.uploads.saturating_sub(1);
    }

    pub fn downloads(&self) -> u16 {
        self.downloads
    }

    pub fn set_downloads(&mut self, n: u16) {
        self.downloads = n;
    }

    pub fn increment_downloads(&mut self) {
        self.downloads = self.downloads.saturating_add(1);
    }

    pub fn decrement_downloads(&mut self) {
        self.downloads = self.downloads.saturating_sub(1);
    }

    pub fn uploaded_k(&self) -> u32 {
        self.uploaded_k
    }

    pub fn set_uploaded_k(&mut self, n: u32) {
        self.uploaded_k = n;
    }

    pub fn add_uploaded_k(&mut self, n: u32) {
        self.uploaded_k = self.uploaded_k.saturating_add(n);
    }

    pub fn downloaded_k(&self) -> u32 {
        self.downloaded_k
    }

    pub fn set_downloaded_k(&mut self, n: u32) {
        self.downloaded_k = n;
    }

    pub fn add_downloaded_k(&mut self, n: u32) {
        self.downloaded_k = self.downloaded_k.saturating_add(n);
    }

    pub fn messages_read(&self) -> u32 {
        self.messages_read
    }

    pub fn set_messages_read(&mut self, n: u32) {
        self.messages_read = n;
    }

    pub fn deleted_posts(&self) -> u16 {
        self.deleted_posts
    }

    pub fn set_deleted_posts(&mut self, n: u16) {
        self.deleted_posts = n;
    }

    pub fn chains_run(&self) -> u16 {
        self.chains_run
    }

    pub fn set_chains_run(&mut self, n: u16) {
        self.chains_run = n;
    }

    pub fn gfiles_read(&self) -> u16 {
        self.gfiles_read
    }

    pub fn set_gfiles_read(&mut self, n: u16) {
        self.gfiles_read = n;
    }

    pub fn points(&self) -> u16 {
        self.points
    }

    pub fn set_points(&mut self, n: u16) {
        self.points = n;
    }

    pub fn add_points(&mut self, n: u16) {
        self.points = self.points.saturating_add(n);
    }

    pub fn last_bps(&self) -> u16 {
        self.last_bps
    }

    pub fn set_last_bps(&mut self, n: u16) {
        self.last_bps = n;
    }

    /// Board-software registration number, 0 when unregistered.
    pub fn registration_num(&self) -> u32 {
        self.registration_num
    }

    pub fn set_registration_num(&mut self, n: u32) {
        self.registration_num = n;
    }

    pub fn gold(&self) -> f32 {
        self.gold
    }

    pub fn set_gold(&mut self, g: f32) {
        self.gold = g;
    }

    /// Voting-booth answer, 0 for an out-of-range question slot.
    pub fn vote(&self, slot: usize) -> u8 {
        self.votes.get(slot).copied().unwrap_or(0)
    }

    pub fn set_vote(&mut self, slot: usize, answer: u8) {
        match self.votes.get_mut(slot) {
            Some(v) => *v = answer,
            None => log::warn!("ignoring vote write to slot {slot}"),
        }
    }

    // ----- time accounting ------------------------------------------------

    pub fn ledger(&self) -> &TimeLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut TimeLedger {
        &mut self.ledger
    }

    pub fn add_time_on(&mut self, d: Duration) -> Duration {
        self.ledger.add_time_on(d)
    }

    pub fn add_time_on_today(&mut self, d: Duration) -> Duration {
        self.ledger.add_time_on_today(d)
    }

    pub fn banktime_minutes(&self) -> u16 {
        self.ledger.banktime_minutes()
    }

    pub fn add_extra_time(&mut self, d: Duration) -> u16 {
        self.ledger.add_extra_time(d)
    }

    pub fn subtract_extra_time(&mut self, d: Duration) -> u16 {
        self.ledger.subtract_extra_time(d)
    }

    // ----- mail routing ---------------------------------------------------

    pub fn mail(&self) -> &MailRoute {
        &self.mail
    }

    pub fn mail_mut(&mut self) -> &mut MailRoute {
        &mut self.mail
    }

    pub fn mailbox_state(&self) -> MailboxState {
        self.mail.state()
    }

    pub fn close_mailbox(&mut self) {
        self.mail.close();
    }

    pub fn forward_mail_to_internet(&mut self) {
        self.mail.forward_to_internet();
    }

    pub fn clear_mail_forward(&mut self) {
        self.mail.clear_forward();
    }

    // ----- colors ---------------------------------------------------------

    pub fn colors(&self) -> &ColorProfile {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorProfile {
        &mut self.colors
    }

    pub fn set_colors(&mut self, colors: ColorProfile) {
        self.colors = colors;
    }

    /// The color slot a renderer should use, honoring the ANSI capability
    /// flag. Out-of-range slots degrade to the default color.
    pub fn effective_color(&self, slot: usize) -> u8 {
        self.colors.effective_color(slot, self.has_ansi())
    }

    // ----- preferences ----------------------------------------------------

    /// Raw stored screen width; 0 means unset.
    pub fn screen_width_raw(&self) -> u8 {
        self.screen_width
    }

    pub fn set_screen_width(&mut self, n: u8) {
        self.screen_width = n;
    }

    /// Effective screen width: a stored 0 substitutes the default 80.
    pub fn screen_width(&self) -> u8 {
        if self.screen_width == 0 {
            DEFAULT_SCREEN_WIDTH
        } else {
            self.screen_width
        }
    }

    pub fn screen_height_raw(&self) -> u8 {
        self.screen_height
    }

    pub fn set_screen_height(&mut self, n: u8) {
        self.screen_height = n;
    }

    /// Effective screen height: a stored 0 substitutes the default 25.
    pub fn screen_height(&self) -> u8 {
        if self.screen_height == 0 {
            DEFAULT_SCREEN_HEIGHT
        } else {
            self.screen_height
        }
    }

    pub fn language(&self) -> u8 {
        self.language
    }

    pub fn set_language(&mut self, n: u8) {
        self.language = n;
    }

    pub fn computer_type(&self) -> i8 {
        self.computer_type
    }

    pub fn set_computer_type(&mut self, n: i8) {
        self.computer_type = n;
    }

    pub fn default_protocol(&self) -> u8 {
        self.default_protocol
    }

    pub fn set_default_protocol(&mut self, n: u8) {
        self.default_protocol = n;
    }

    pub fn default_editor(&self) -> u8 {
        self.default_editor
    }

    pub fn set_default_editor(&mut self, n: u8) {
        self.default_editor = n;
    }

    pub fn optional_val(&self) -> u8 {
        self.optional_val
    }

    pub fn set_optional_val(&mut self, n: u8) {
        self.optional_val = n;
    }

    pub fn extended_desc_lines(&self) -> u8 {
        self.extended_desc_lines
    }

    pub fn set_extended_desc_lines(&mut self, n: u8) {
        self.extended_desc_lines = n;
    }

    pub fn full_file_descriptions(&self) -> bool {
        self.full_file_descriptions
    }

    pub fn set_full_file_descriptions(&mut self, b: bool) {
        self.full_file_descriptions = b;
    }

    pub fn hotkeys(&self) -> bool {
        self.hot_keys == HOTKEYS_ON
    }

    pub fn set_hotkeys(&mut self, enabled: bool) {
        self.hot_keys = if enabled { HOTKEYS_ON } else { HOTKEYS_OFF };
    }

    pub fn menu_set(&self) -> &str {
        &self.menu_set
    }

    pub fn set_menu_set(&mut self, s: &str) {
        self.menu_set = fit(s, MENU_SET_LEN);
    }

    pub fn last_msg_conf(&self) -> u16 {
        self.last_msg_conf
    }

    pub fn set_last_msg_conf(&mut self, n: u16) {
        self.last_msg_conf = n;
    }

    pub fn last_msg_area(&self) -> u16 {
        self.last_msg_area
    }

    pub fn set_last_msg_area(&mut self, n: u16) {
        self.last_msg_area = n;
    }

    pub fn last_file_conf(&self) -> u16 {
        self.last_file_conf
    }

    pub fn set_last_file_conf(&mut self, n: u16) {
        self.last_file_conf = n;
    }

    pub fn last_file_area(&self) -> u16 {
        self.last_file_area
    }

    pub fn set_last_file_area(&mut self, n: u16) {
        self.last_file_area = n;
    }

    // ----- presence -------------------------------------------------------

    pub fn first_on(&self) -> &str {
        &self.first_on
    }

    pub fn set_first_on(&mut self, s: &str) {
        self.first_on = fit(s, DATE_STR_LEN);
    }

    pub fn last_on(&self) -> &str {
        &self.last_on
    }

    pub fn set_last_on(&mut self, s: &str) {
        self.last_on = fit(s, DATE_STR_LEN);
    }

    pub fn last_logon_time(&self) -> Option<DateTime<Utc>> {
        self.last_logon_time
    }

    pub fn set_last_logon_time(&mut self, t: DateTime<Utc>) {
        self.last_logon_time = Some(t);
    }

    pub fn new_scan_time(&self) -> Option<DateTime<Utc>> {
        self.new_scan_time
    }

    pub fn set_new_scan_time(&mut self, t: DateTime<Utc>) {
        self.new_scan_time = Some(t);
    }

    pub fn last_address(&self) -> Option<IpAddr> {
        self.last_address
    }

    pub fn set_last_address(&mut self, a: IpAddr) {
        self.last_address = Some(a);
    }

    // ----- maintenance ----------------------------------------------------

    /// Re-truncate every text field to its storage width. Run after loading
    /// records written by older versions or foreign tools; a record built
    /// through the setters is already in shape and passes unchanged.
    pub fn normalize(&mut self) {
        self.name = fit(&self.name, NAME_LEN);
        self.real_name = fit(&self.real_name, REAL_NAME_LEN);
        self.callsign = fit(&self.callsign, CALLSIGN_LEN);
        self.voice_phone = fit(&self.voice_phone, PHONE_LEN);
        self.data_phone = fit(&self.data_phone, PHONE_LEN);
        self.street = fit(&self.street, STREET_LEN);
        self.city = fit(&self.city, CITY_LEN);
        self.state = fit(&self.state, STATE_LEN);
        self.country = fit(&self.country, COUNTRY_LEN);
        self.zipcode = fit(&self.zipcode, ZIPCODE_LEN);
        self.password = fit(&self.password, PASSWORD_LEN);
        self.email = fit(&self.email, EMAIL_LEN);
        self.note = fit(&self.note, NOTE_LEN);
        self.menu_set = fit(&self.menu_set, MENU_SET_LEN);
        self.first_on = fit(&self.first_on, DATE_STR_LEN);
        self.last_on = fit(&self.last_on, DATE_STR_LEN);
        for m in &mut self.macros {
            *m = fit(m, MACRO_LEN);
        }
    }

    /// Zero the per-day counters. Invoked by the session layer once per
    /// session-day, not by anything inside this record.
    pub fn reset_today_stats(&mut self) {
        self.calls_today = 0;
        self.posts_today = 0;
        self.email_today = 0;
        self.feedback_today = 0;
        self.ledger.reset_today();
    }

    /// Count a logon: bumps the lifetime and today call counters and stamps
    /// the last-logon fields. Returns the new lifetime logon count.
    pub fn add_call_today(&mut self, now: DateTime<Utc>) -> u16 {
        self.logons = self.logons.saturating_add(1);
        self.calls_today = self.calls_today.saturating_add(1);
        self.last_logon_time = Some(now);
        self.last_on = now.format("%m/%d/%y").to_string();
        if self.first_on.is_empty() {
            self.first_on = self.last_on.clone();
        }
        self.logons
    }
}
