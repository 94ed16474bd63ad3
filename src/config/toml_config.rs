use crate::config::{join_asset_paths, DEFAULT_ASSETS, DEFAULT_TITLE};
use crate::core::post_processor::DEFAULT_PLACEHOLDER_CLASS;
use crate::core::ConfigProvider;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate, IMAGE_EXTENSIONS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub dashboard: DashboardSection,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
    pub output: OutputConfig,
    pub render: Option<RenderConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub title: String,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub directory: String,
    pub files: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            files: DEFAULT_ASSETS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    pub classes: Vec<String>,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            classes: vec![DEFAULT_PLACEHOLDER_CLASS.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
    pub report: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

const DEFAULT_OUTPUT_FILE: &str = "dashboard.html";

fn env_var_regex() -> &'static Regex {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(&Self::substitute_env_vars(content))
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSET_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        Self::substitute_vars(content, |name| std::env::var(name).ok())
    }

    fn substitute_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dashboard.title", &self.dashboard.title)?;
        validation::validate_path("assets.directory", &self.assets.directory)?;
        validation::validate_non_empty_list("assets.files", &self.assets.files)?;
        validation::validate_file_extensions("assets.files", &self.assets.files, IMAGE_EXTENSIONS)?;
        validation::validate_class_tokens("placeholder.classes", &self.placeholder.classes)?;
        validation::validate_path("output.path", &self.output.path)?;
        if let Some(filename) = &self.output.filename {
            validation::validate_path("output.filename", filename)?;
        }
        Ok(())
    }

    pub fn report_enabled(&self) -> bool {
        self.output.report.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn page_title(&self) -> &str {
        &self.dashboard.title
    }

    fn asset_paths(&self) -> Vec<String> {
        join_asset_paths(&self.assets.directory, &self.assets.files)
    }

    fn placeholder_classes(&self) -> &[String] {
        &self.placeholder.classes
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        self.output.filename.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    fn seed(&self) -> Option<u64> {
        self.render.as_ref().and_then(|r| r.seed)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
