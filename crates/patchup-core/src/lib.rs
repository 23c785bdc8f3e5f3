//! Core support utilities for the patchup auto-updater.
//!
//! Three independent services consumed by the surrounding updater: metadata
//! sanity checking (`metadata`), the worker-to-UI progress relay (`relay` and
//! `widgets`), and human-readable byte formatting (`bytes`). `failure` holds
//! the worker error taxonomy and the disposed-resource classifier used to
//! tell cancellation fallout apart from genuine errors.

pub mod config;
pub mod logging;

pub mod bytes;
pub mod failure;
pub mod metadata;
pub mod relay;
pub mod widgets;
