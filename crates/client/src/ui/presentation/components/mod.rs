//! Reusable UI components

pub mod common;
