mod app_context;
mod config_warnings;

pub use app_context::AppContext;
#[cfg(test)]
pub use app_context::test_support;
pub use config_warnings::warn_unconfigured;
