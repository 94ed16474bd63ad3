pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate, IMAGE_EXTENSIONS};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Workspace Analytics";
pub const DEFAULT_ASSETS: &[&str] = &[
    "image1.png",
    "image2.png",
    "image3.png",
    "image4.png",
    "image5.png",
];

/// 將資產目錄與檔名合併；絕對路徑的檔名保持不變
pub fn join_asset_paths(dir: &str, files: &[String]) -> Vec<String> {
    files
        .iter()
        .map(|file| Path::new(dir).join(file).to_string_lossy().into_owned())
        .collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "workspace-analytics")]
#[command(about = "Render the workspace analytics dashboard to a static HTML page")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Directory holding the icon images")]
    pub asset_dir: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "image1.png,image2.png,image3.png,image4.png,image5.png"
    )]
    pub assets: Vec<String>,

    #[arg(long, value_delimiter = ',', default_value = "person-icon")]
    pub placeholder_classes: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "dashboard.html")]
    pub output_file: String,

    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, help = "Seed for reproducible mock data and icon choice")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print a JSON run report to stdout")]
    pub report: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn page_title(&self) -> &str {
        &self.title
    }

    fn asset_paths(&self) -> Vec<String> {
        join_asset_paths(&self.asset_dir, &self.assets)
    }

    fn placeholder_classes(&self) -> &[String] {
        &self.placeholder_classes
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("asset_dir", &self.asset_dir)?;
        validation::validate_non_empty_list("assets", &self.assets)?;
        validation::validate_file_extensions("assets", &self.assets, IMAGE_EXTENSIONS)?;
        validation::validate_class_tokens("placeholder_classes", &self.placeholder_classes)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}
