use crate::utils::error::{DashboardError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 支援內嵌的圖片副檔名
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        let extension = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if allowed_set.contains(ext.as_str()) => {}
            Some(ext) => {
                return Err(DashboardError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        ext,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(DashboardError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(DashboardError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn class_token_regex() -> &'static Regex {
    static CLASS_TOKEN: OnceLock<Regex> = OnceLock::new();
    CLASS_TOKEN.get_or_init(|| {
        Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").expect("class token pattern is valid")
    })
}

/// 佔位符 class 必須是單一 CSS class 名稱（不可含空白或引號）
pub fn validate_class_token(field_name: &str, class: &str) -> Result<()> {
    if !class_token_regex().is_match(class) {
        return Err(DashboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: class.to_string(),
            reason: "Not a valid CSS class name".to_string(),
        });
    }
    Ok(())
}

pub fn validate_class_tokens(field_name: &str, classes: &[String]) -> Result<()> {
    validate_non_empty_list(field_name, classes)?;
    for class in classes {
        validate_class_token(field_name, class)?;
    }
    Ok(())
}
