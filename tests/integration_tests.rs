use anyhow::Result;
use tempfile::TempDir;
use workspace_analytics::core::ConfigProvider;
use workspace_analytics::utils::validation::Validate;
use workspace_analytics::{CliConfig, DashboardEngine, DashboardError, LocalStorage, TomlConfig};

// 最小的 1x1 PNG 檔頭片段即可，內容不會被解碼
const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

fn write_assets(dir: &TempDir, count: usize) -> Result<()> {
    for i in 1..=count {
        let mut bytes = FAKE_PNG.to_vec();
        bytes.push(i as u8);
        std::fs::write(dir.path().join(format!("image{}.png", i)), bytes)?;
    }
    Ok(())
}

fn cli_config(asset_dir: &TempDir, output_dir: &TempDir) -> CliConfig {
    CliConfig {
        asset_dir: asset_dir.path().to_string_lossy().into_owned(),
        assets: (1..=5).map(|i| format!("image{}.png", i)).collect(),
        placeholder_classes: vec!["person-icon".to_string()],
        output_path: output_dir.path().to_string_lossy().into_owned(),
        output_file: "dashboard.html".to_string(),
        title: "Workspace Analytics".to_string(),
        seed: Some(1234),
        report: false,
        json_logs: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_render_with_local_storage() -> Result<()> {
    let asset_dir = TempDir::new()?;
    let output_dir = TempDir::new()?;
    write_assets(&asset_dir, 5)?;

    let config = cli_config(&asset_dir, &output_dir);
    config.validate()?;

    let engine = DashboardEngine::new(LocalStorage::new(".".to_string()), config);
    let report = engine.run().await?;

    assert_eq!(report.asset_count, 5);
    assert!(report.placeholders_substituted > 0);

    let page = std::fs::read_to_string(output_dir.path().join("dashboard.html"))?;
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Workspace Analytics</title>"));
    for tab in ["Engagement", "Collaboration", "Discovery"] {
        assert!(page.contains(&format!(">{}</label>", tab)));
    }
    assert!(page.contains("Active Contributors"));
    assert!(page.contains("Searches by Teamspace"));
    assert!(!page.contains(r#"<div class="person-icon"></div>"#));
    assert_eq!(
        page.matches("data:image/png;base64,").count(),
        report.placeholders_substituted
    );

    let report_json = serde_json::to_value(&report)?;
    assert_eq!(report_json["asset_count"], 5);
    Ok(())
}

#[tokio::test]
async fn test_missing_asset_aborts_before_output() -> Result<()> {
    let asset_dir = TempDir::new()?;
    let output_dir = TempDir::new()?;
    write_assets(&asset_dir, 4)?;

    let engine = DashboardEngine::new(
        LocalStorage::new(".".to_string()),
        cli_config(&asset_dir, &output_dir),
    );
    let err = engine.run().await.unwrap_err();

    match &err {
        DashboardError::AssetLoadError { path, .. } => assert!(path.ends_with("image5.png")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 3);
    assert!(!output_dir.path().join("dashboard.html").exists());
    Ok(())
}

#[tokio::test]
async fn test_toml_config_with_extra_placeholder_class() -> Result<()> {
    let asset_dir = TempDir::new()?;
    let output_dir = TempDir::new()?;
    write_assets(&asset_dir, 2)?;

    let toml_content = format!(
        r#"
[dashboard]
title = "Team Pulse"

[assets]
directory = "{}"
files = ["image1.png", "image2.png"]

[placeholder]
classes = ["person-icon", "page-icon"]

[output]
path = "{}"
filename = "pulse.html"

[render]
seed = 5
"#,
        asset_dir.path().to_string_lossy().replace('\\', "/"),
        output_dir.path().to_string_lossy().replace('\\', "/")
    );
    let config_path = asset_dir.path().join("dashboard.toml");
    tokio::fs::write(&config_path, toml_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.output_file(), "pulse.html");

    let engine = DashboardEngine::new(LocalStorage::new(".".to_string()), config);
    let report = engine.run().await?;

    let page = std::fs::read_to_string(output_dir.path().join("pulse.html"))?;
    assert!(page.contains("<title>Team Pulse</title>"));
    assert!(!page.contains(r#"<div class="page-icon"></div>"#));
    assert!(page.contains(r#"<div class="page-icon" style="background: url('data:image/png;base64,"#));
    assert_eq!(report.asset_count, 2);
    Ok(())
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() -> Result<()> {
    let asset_dir = TempDir::new()?;
    write_assets(&asset_dir, 5)?;

    let mut pages = Vec::new();
    for _ in 0..2 {
        let output_dir = TempDir::new()?;
        let engine = DashboardEngine::new(
            LocalStorage::new(".".to_string()),
            cli_config(&asset_dir, &output_dir),
        );
        engine.run().await?;
        let page = std::fs::read_to_string(output_dir.path().join("dashboard.html"))?;
        let body = page.split("<footer").next().unwrap_or_default().to_string();
        pages.push(body);
    }

    assert_eq!(pages[0], pages[1]);
    Ok(())
}
