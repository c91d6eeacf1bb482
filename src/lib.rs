// Library target exists so integration tests can drive the app core.
// The binary entry point is main.rs; this file re-declares the module tree
// so tests can import types via `lexigo::app::*` / `lexigo::browser::*`.
// Some code is only exercised through the binary, so suppress dead_code
// warnings.
#![allow(dead_code)]

pub mod api;
pub mod app;
pub mod browser;
pub mod config;
pub mod event;
pub mod ui;
