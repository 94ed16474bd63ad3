use crate::domain::model::{Fragment, RenderOptions};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn page_title(&self) -> &str;
    /// 資產檔案路徑（已與資產目錄合併）
    fn asset_paths(&self) -> Vec<String>;
    fn placeholder_classes(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}

/// 宿主框架的顯示原語
pub trait Renderer {
    fn render(&mut self, fragment: Fragment, options: &RenderOptions) -> Result<()>;
    fn begin_tab(&mut self, label: &str);
}
