pub mod asset_pool;
pub mod engine;
pub mod post_processor;
pub mod renderer;

pub use crate::domain::model::{Fragment, RenderOptions, RenderReport};
pub use crate::domain::ports::{ConfigProvider, Renderer, Storage};
pub use crate::utils::error::Result;
