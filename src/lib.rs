//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits, plus a
//! small seven-segment glyph set for rendering the readings on tile-oriented
//! displays.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Configurable protocol timing via [`Timing`]
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! The sensor transmits each bit as a high pulse whose duration encodes the
//! value (~30 us for 0, ~70 us for 1). The driver measures those pulses by
//! polling the line once per microsecond, so the delay provider should be
//! reasonably accurate at the 1 us scale.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod dht11;
pub mod error;
pub mod font;
pub mod timing;

pub use dht11::{Dht11, Reading};
pub use error::DhtError;
pub use timing::Timing;
