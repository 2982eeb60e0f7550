//! The `ipinfo` command line.
//!
//! [`args`] defines the two reports, `address` (public address plus local
//! interfaces) and `lookup` (metadata for one IP), along with the global
//! flags. [`commands`] runs them and prints every outcome, failures included,
//! to stdout.

pub mod args;
pub mod commands;
