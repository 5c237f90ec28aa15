//! Todo List Frontend Entry Point

use leptos::prelude::*;
use todo_list_ui::app::App;
use todo_list_ui::config::AppConfig;
use todo_list_ui::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    logging::init(config.log_level);
    log::info!("[APP] api={} mode={:?} page_size={}", config.api_base, config.mode, config.page_size);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
