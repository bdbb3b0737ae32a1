//! # Userrec - Subscriber Account Records for Bulletin Board Systems
//!
//! Userrec implements the persisted per-subscriber account record shared by
//! every subsystem of a classic multi-user BBS: login, messaging, file
//! transfer, and menus all read and mutate subscribers through this one
//! aggregate. The crate's job is the data model as a contract: the flag
//! domains, sentinel-coded routing fields, default-substitution rules, and
//! saturating counters that must hold exactly across versions and across
//! every mutator.
//!
//! ## Features
//!
//! - **Typed flag registers**: Lifecycle, exemption, restriction, and
//!   system-status bits live in distinct newtypes that cannot be
//!   cross-applied; the ar/dar access registers add the empty-mask-is-granted
//!   rule.
//! - **Mailbox routing**: Forwarding state classified into an explicit enum
//!   instead of sentinel comparisons scattered through business logic.
//! - **Degrade, never fail**: Out-of-range color slots read as the default
//!   color, oversized text truncates to its storage width, and numeric input
//!   helpers fall back to a caller default.
//! - **Atomic sign-up**: The account factory validates its whole seed before
//!   any record exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use userrec::account::factory::{self, NewUserSeed};
//! use userrec::flags::StatusFlags;
//!
//! fn main() -> anyhow::Result<()> {
//!     let seed = NewUserSeed {
//!         security_level: 10,
//!         download_security_level: 0,
//!         restrictions: 0,
//!         gold: 0.0,
//!         ansi_colors: vec![7; 10],
//!         mono_colors: vec![7; 10],
//!     };
//!     let mut rec = factory::create(&seed)?;
//!     rec.set_name("New Caller");
//!     rec.set_status_flag(StatusFlags::ANSI);
//!     assert_eq!(rec.effective_color(0), 7);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`account`] - The account record aggregate and its factory
//! - [`flags`] - The independent bitmask registers
//! - [`mailroute`] - Mailbox forwarding classification and transitions
//! - [`colors`] - Dual capability-gated color palettes
//! - [`timeledger`] - Time-on counters and the extra-time bank
//! - [`config`] - New-user seed defaults from the board's TOML config
//! - [`input`] - Degrade-to-default numeric parsing for session prompts
//!
//! ## Concurrency
//!
//! Every operation is a synchronous in-memory transformation. The crate
//! provides no locking; exactly one session owns a record at a time, and
//! duplicate-login or background-maintenance races are the calling layer's
//! problem to exclude (per-account lock or single-writer actor). Persistence
//! happens around this core, never from it.

pub mod account;
pub mod colors;
pub mod config;
pub mod flags;
pub mod input;
pub mod mailroute;
pub mod timeledger;

pub use account::factory::{AccountError, NewUserSeed};
pub use account::{AccountRecord, Gender};
pub use colors::ColorProfile;
pub use flags::{AccessFlags, ExemptFlags, LifecycleFlags, RestrictFlags, StatusFlags};
pub use mailroute::{MailRoute, MailboxState, INTERNET_GATEWAY_NODE, MAILBOX_CLOSED};
pub use timeledger::TimeLedger;
