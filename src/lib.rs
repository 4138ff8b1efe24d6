//! quickrec-prefs - QuickRecorder recording preferences
//!
//! This crate provides the typed preference repository behind the
//! QuickRecorder settings surface: recording formats and options, a
//! versioned background color encoding, output directory selection and
//! launch-at-login registration.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Preference keys, value objects, color codec and errors
//! - **Application**: The settings surface use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (TOML store, autostart entries, native dialogs)
//! - **CLI**: Command-line interface, argument parsing and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
