use crate::core::Storage;
use crate::utils::error::{DashboardError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;
use std::path::Path;

/// 已編碼、可直接嵌入標記的圖片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    name: String,
    mime_type: &'static str,
    base64: String,
}

impl EncodedAsset {
    pub fn encode(name: impl Into<String>, mime_type: &'static str, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            mime_type,
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Maps a file name to the MIME type used in its data URI. Unknown extensions fall back to PNG.
pub fn mime_type_for(path: &str) -> &'static str {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Immutable, pre-loaded collection of embeddable images.
///
/// Built once at startup and shared by reference; selection never mutates it.
#[derive(Debug, Clone)]
pub struct AssetPool {
    assets: Vec<EncodedAsset>,
}

impl AssetPool {
    /// 從儲存層讀取所有資產；任一檔案失敗即整體失敗，不接受部分結果
    pub async fn load<S: Storage>(storage: &S, paths: &[String]) -> Result<Self> {
        if paths.is_empty() {
            return Err(DashboardError::EmptyAssetPool);
        }

        let mut assets = Vec::with_capacity(paths.len());
        for path in paths {
            tracing::debug!("Loading asset: {}", path);
            let bytes = storage.read_file(path).await.map_err(|e| match e {
                DashboardError::IoError(source) | DashboardError::AssetLoadError { source, .. } => {
                    DashboardError::AssetLoadError {
                        path: path.clone(),
                        source,
                    }
                }
                other => other,
            })?;
            tracing::debug!("Encoded asset {} ({} bytes)", path, bytes.len());
            assets.push(EncodedAsset::encode(path.as_str(), mime_type_for(path), &bytes));
        }

        tracing::info!("Asset pool ready with {} images", assets.len());
        Ok(Self { assets })
    }

    pub fn from_payloads<I, N>(payloads: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<u8>)>,
        N: Into<String>,
    {
        let assets: Vec<EncodedAsset> = payloads
            .into_iter()
            .map(|(name, bytes)| {
                let name = name.into();
                let mime = mime_type_for(&name);
                EncodedAsset::encode(name, mime, &bytes)
            })
            .collect();

        if assets.is_empty() {
            return Err(DashboardError::EmptyAssetPool);
        }
        Ok(Self { assets })
    }

    /// 均勻抽取一個資產（可重複抽中）
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &EncodedAsset {
        let index = rng.gen_range(0..self.assets.len());
        &self.assets[index]
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedAsset> {
        self.assets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_files(files: &[(&str, &str)]) -> Self {
            let map = files
                .iter()
                .map(|(name, data)| (name.to_string(), data.as_bytes().to_vec()))
                .collect();
            Self {
                files: Arc::new(Mutex::new(map)),
            }
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DashboardError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_encodes_every_asset_in_order() {
        let storage = MockStorage::with_files(&[("a.png", "alpha"), ("b.jpg", "beta")]);
        let paths = vec!["a.png".to_string(), "b.jpg".to_string()];

        let pool = AssetPool::load(&storage, &paths).await.unwrap();

        assert_eq!(pool.len(), 2);
        let assets: Vec<&EncodedAsset> = pool.iter().collect();
        assert_eq!(assets[0].name(), "a.png");
        assert_eq!(assets[0].base64(), "YWxwaGE=");
        assert_eq!(assets[0].data_uri(), "data:image/png;base64,YWxwaGE=");
        assert_eq!(assets[1].mime_type(), "image/jpeg");
    }

    #[tokio::test]
    async fn test_load_fails_on_missing_asset() {
        let storage = MockStorage::with_files(&[("a.png", "alpha")]);
        let paths = vec!["a.png".to_string(), "missing.png".to_string()];

        let err = AssetPool::load(&storage, &paths).await.unwrap_err();

        match err {
            DashboardError::AssetLoadError { path, .. } => assert_eq!(path, "missing.png"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_rejects_empty_path_list() {
        let storage = MockStorage::with_files(&[]);
        let err = AssetPool::load(&storage, &[]).await.unwrap_err();
        assert!(matches!(err, DashboardError::EmptyAssetPool));
    }

    #[test]
    fn test_from_payloads_requires_assets() {
        let empty: Vec<(String, Vec<u8>)> = vec![];
        assert!(AssetPool::from_payloads(empty).is_err());
    }

    #[test]
    fn test_choose_only_returns_pool_members() {
        let pool = AssetPool::from_payloads(vec![
            ("one.png", b"1".to_vec()),
            ("two.png", b"2".to_vec()),
            ("three.png", b"3".to_vec()),
        ])
        .unwrap();
        let names: Vec<&str> = pool.iter().map(|a| a.name()).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let chosen = pool.choose(&mut rng);
            assert!(names.contains(&chosen.name()));
        }
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("image1.png"), "image/png");
        assert_eq!(mime_type_for("photo.JPEG"), "image/jpeg");
        assert_eq!(mime_type_for("icon.svg"), "image/svg+xml");
        assert_eq!(mime_type_for("anim.gif"), "image/gif");
        assert_eq!(mime_type_for("noext"), "image/png");
    }
}
