//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::config::{AppConfig, ListMode};
use crate::controller::TodoListController;

pub type AppController = TodoListController<HttpTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller bound to the configured server
    controller: StoredValue<AppController>,
    /// Which list variant is running
    pub mode: ListMode,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let api = HttpTodoApi::from_config(config);
        Self {
            controller: StoredValue::new(TodoListController::new(api, config.page_size, config.mode)),
            mode: config.mode,
        }
    }

    /// A handle to move into a spawned task
    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
