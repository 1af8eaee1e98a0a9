//! Voiceprint - Author Voice Profiling and Style Enforcement Engine
//!
//! Derives a statistical voice profile from an author's writing samples,
//! plans style directives that steer a text generator toward that voice,
//! deterministically enforces stylistic constraints on the output, and
//! validates the result against the profile.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
