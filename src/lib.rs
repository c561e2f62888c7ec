// ABOUTME: Library crate for flash-box exposing the flash notifier and its TUI consumer

pub mod app;
pub mod components;
pub mod config;
pub mod flash;
