//! Shared utility modules used across wordforest components.

pub mod hamming;
