use crate::core::asset_pool::{AssetPool, EncodedAsset};
use crate::domain::model::Fragment;
use crate::utils::error::Result;
use crate::utils::validation::validate_class_tokens;
use rand::Rng;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;

pub const DEFAULT_PLACEHOLDER_CLASS: &str = "person-icon";

/// Replaces icon placeholders in outgoing markup with inline images drawn from an [`AssetPool`].
///
/// A placeholder is exactly `<div class="CLASS"></div>`, where whitespace may separate
/// `div` from `class` and may precede the closing `>`. Each match draws its own asset.
#[derive(Debug, Clone)]
pub struct MarkupPostProcessor {
    pool: Arc<AssetPool>,
    classes: Vec<String>,
    pattern: Regex,
}

impl MarkupPostProcessor {
    pub fn new(pool: Arc<AssetPool>, classes: &[String]) -> Result<Self> {
        validate_class_tokens("placeholder.classes", classes)?;

        let alternatives = classes
            .iter()
            .map(|class| regex::escape(class))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r#"<div\s+class="({})"\s*></div>"#, alternatives))?;

        tracing::debug!("Placeholder pattern compiled for classes: {:?}", classes);

        Ok(Self {
            pool,
            classes: classes.to_vec(),
            pattern,
        })
    }

    pub fn with_default_class(pool: Arc<AssetPool>) -> Result<Self> {
        Self::new(pool, &[DEFAULT_PLACEHOLDER_CLASS.to_string()])
    }

    pub fn pool(&self) -> &AssetPool {
        &self.pool
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn count_placeholders(&self, markup: &str) -> usize {
        self.pattern.find_iter(markup).count()
    }

    /// Substitutes every placeholder in `fragment`, returning the rewritten markup
    /// together with the number of substitutions made.
    pub fn process_counted<R: Rng + ?Sized>(
        &self,
        fragment: impl Into<Fragment>,
        rng: &mut R,
    ) -> (Fragment, usize) {
        let fragment = fragment.into();
        let mut substituted = 0usize;

        let rewritten = match self.pattern.replace_all(fragment.as_str(), |caps: &Captures| {
            substituted += 1;
            let asset = self.pool.choose(&mut *rng);
            replacement_element(&caps[1], asset)
        }) {
            Cow::Owned(markup) => Some(markup),
            Cow::Borrowed(_) => None,
        };

        // 無佔位符時原樣回傳，不重新配置字串
        let output = rewritten.map(Fragment::from).unwrap_or(fragment);

        (output, substituted)
    }

    pub fn process<R: Rng + ?Sized>(&self, fragment: impl Into<Fragment>, rng: &mut R) -> Fragment {
        self.process_counted(fragment, rng).0
    }

    /// 先將位元組轉為文字，再進行替換
    pub fn process_bytes<R: Rng + ?Sized>(&self, bytes: Vec<u8>, rng: &mut R) -> Result<Fragment> {
        let fragment = Fragment::from_bytes(bytes)?;
        Ok(self.process(fragment, rng))
    }
}

fn replacement_element(class: &str, asset: &EncodedAsset) -> String {
    format!(
        "<div class=\"{}\" style=\"background: url('{}') no-repeat center center; background-size: contain;\"></div>",
        class,
        asset.data_uri()
    )
}
