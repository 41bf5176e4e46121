//! CLI infrastructure for the twentyone sandbox
//!
//! This module provides the command-line interface for training,
//! evaluating, and playing against the Monte Carlo agent.

pub mod commands;
pub mod output;
