pub mod config;
pub mod core;
pub mod dashboard;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{
    asset_pool::AssetPool,
    engine::DashboardEngine,
    post_processor::MarkupPostProcessor,
    renderer::{HtmlPageRenderer, RenderSession},
};
pub use domain::model::{Fragment, RenderOptions, RenderReport};
pub use utils::error::{DashboardError, Result};
