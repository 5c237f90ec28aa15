//! Todo List Frontend
//!
//! Layers:
//! - models / api: wire types and the remote `/todos` resource
//! - store / controller: list state and how CRUD results change it
//! - components: Leptos views

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod ordering;
pub mod store;
