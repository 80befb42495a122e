mod app_tests;
mod auth_page_tests;
mod config_tests;
mod error_tests;
mod notification_tests;
mod router_tests;
mod support;
mod validation_tests;
