//! Request and response models for the gateway's JSON surface.

pub mod access;
pub mod responses;
