//! This crate contains all shared UI for the workspace.
//!
//! Screen transitions live in [`controller`], which is plain async Rust and
//! tested without a renderer. The components in [`views`] only collect input
//! and send [`Command`]s through the [`Dispatcher`].

use dioxus::prelude::*;

pub mod state;
pub use state::{Alert, AppState, Screen, Session};

pub mod controller;
pub use controller::{Command, Controller, Outcome, StateSlot, SCREENING_DISCLAIMER};

mod platform;
pub use platform::{load_config, make_controller, AppController, PlatformStore};

mod context;
pub use context::{use_app, use_dispatch, AppProvider, Dispatcher};

pub mod views;

mod app;
pub use app::MindCheck;

pub const MINDCHECK_CSS: Asset = asset!("/assets/mindcheck.css");
