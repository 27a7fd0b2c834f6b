//! A terminal cipher quest: ordered trials of encoded messages, hints that
//! unlock one at a time, and a key assembled from every reward.

pub mod cipher;
pub mod config;
pub mod engine;
pub mod puzzle;
pub mod relay;
