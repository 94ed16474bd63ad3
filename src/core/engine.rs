use crate::core::asset_pool::AssetPool;
use crate::core::post_processor::MarkupPostProcessor;
use crate::core::renderer::{HtmlPageRenderer, RenderSession};
use crate::core::{ConfigProvider, Storage};
use crate::dashboard;
use crate::domain::model::RenderReport;
use crate::utils::error::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;

pub struct DashboardEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DashboardEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 一次性啟動：讀取資產池。任何資產缺失都在此失敗，之後不會發生替換
    pub async fn load_assets(&self) -> Result<Arc<AssetPool>> {
        let paths = self.config.asset_paths();
        tracing::info!("Loading {} icon assets", paths.len());
        let pool = AssetPool::load(&self.storage, &paths).await?;
        Ok(Arc::new(pool))
    }

    pub async fn run(&self) -> Result<RenderReport> {
        tracing::info!("Starting dashboard render: {}", self.config.page_title());

        let pool = self.load_assets().await?;
        let processor = MarkupPostProcessor::new(pool.clone(), self.config.placeholder_classes())?;

        // 同一個 seed 同時決定模擬數據與圖示抽選，輸出可重現
        let mut rng = match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let session_rng = StdRng::seed_from_u64(rng.gen());

        let renderer = HtmlPageRenderer::new(self.config.page_title());
        let mut session = RenderSession::new(&processor, renderer, session_rng);

        dashboard::render_dashboard(&mut session, self.config.page_title(), &mut rng)?;

        let fragments_rendered = session.fragments_rendered();
        let placeholders_substituted = session.placeholders_substituted();
        tracing::info!(
            "Rendered {} fragments, substituted {} placeholders",
            fragments_rendered,
            placeholders_substituted
        );

        let generated_at = Utc::now();
        let page = session.into_renderer().finish(generated_at);

        let output_path = Path::new(self.config.output_path())
            .join(self.config.output_file())
            .to_string_lossy()
            .into_owned();
        tracing::debug!("Writing page ({} bytes) to {}", page.len(), output_path);
        self.storage.write_file(&output_path, page.as_bytes()).await?;

        Ok(RenderReport {
            output_path,
            fragments_rendered,
            placeholders_substituted,
            asset_count: pool.len(),
            generated_at,
        })
    }
}
