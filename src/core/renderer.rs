use crate::core::post_processor::MarkupPostProcessor;
use crate::core::Renderer;
use crate::domain::model::{Fragment, RenderOptions};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
struct Tab {
    label: String,
    blocks: Vec<String>,
}

/// 以記憶體組裝完整 HTML 文件的 renderer，每個 tab 為一個區段
#[derive(Debug, Clone)]
pub struct HtmlPageRenderer {
    title: String,
    preamble: Vec<String>,
    tabs: Vec<Tab>,
}

impl HtmlPageRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            preamble: Vec::new(),
            tabs: Vec::new(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.preamble.len() + self.tabs.iter().map(|t| t.blocks.len()).sum::<usize>()
    }

    pub fn tab_labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.label.as_str()).collect()
    }

    fn push_block(&mut self, block: String) {
        match self.tabs.last_mut() {
            Some(tab) => tab.blocks.push(block),
            None => self.preamble.push(block),
        }
    }

    pub fn finish(self, generated_at: DateTime<Utc>) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str(TAB_STYLES);
        html.push_str("</head>\n<body class=\"stApp\">\n<main class=\"main\"><div class=\"block-container\">\n");

        for block in &self.preamble {
            html.push_str(block);
            html.push('\n');
        }

        let tabs = self.tabs;
        if !tabs.is_empty() {
            html.push_str("<div class=\"tabs\">\n");
            for (index, tab) in tabs.iter().enumerate() {
                let id = format!("tab-{}", index);
                let checked = if index == 0 { " checked" } else { "" };
                html.push_str(&format!(
                    "<input type=\"radio\" name=\"tabs\" id=\"{}\"{}><label for=\"{}\">{}</label>\n",
                    id,
                    checked,
                    id,
                    escape_html(&tab.label)
                ));
            }
            for tab in &tabs {
                html.push_str("<section class=\"tab-panel\">\n");
                for block in &tab.blocks {
                    html.push_str(block);
                    html.push('\n');
                }
                html.push_str("</section>\n");
            }
            html.push_str("</div>\n");
        }

        html.push_str(&format!(
            "<footer class=\"generated\">Generated {}</footer>\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        html.push_str("</div></main>\n</body>\n</html>\n");
        html
    }
}

impl Renderer for HtmlPageRenderer {
    fn render(&mut self, fragment: Fragment, options: &RenderOptions) -> Result<()> {
        let body = if options.unsafe_allow_html {
            fragment.into_string()
        } else {
            format!("<p>{}</p>", escape_html(fragment.as_str()))
        };

        let block = match &options.help {
            Some(help) => format!(
                "<div class=\"block\" title=\"{}\">{}</div>",
                escape_html(help),
                body
            ),
            None => format!("<div class=\"block\">{}</div>", body),
        };

        self.push_block(block);
        Ok(())
    }

    fn begin_tab(&mut self, label: &str) {
        self.tabs.push(Tab {
            label: label.to_string(),
            blocks: Vec::new(),
        });
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// 純 CSS 分頁：radio + label，第 N 個 radio 被選取時顯示第 N 個 panel
const TAB_STYLES: &str = r#"<style>
    .tabs { display: flex; flex-wrap: wrap; }
    .tabs > input[type="radio"] { display: none; }
    .tabs > label { padding: 8px 16px; cursor: pointer; border-bottom: 2px solid transparent; }
    .tabs > input[type="radio"]:checked + label { border-bottom-color: #2483E2; }
    .tab-panel { display: none; width: 100%; order: 1; }
    #tab-0:checked ~ .tab-panel:nth-of-type(1),
    #tab-1:checked ~ .tab-panel:nth-of-type(2),
    #tab-2:checked ~ .tab-panel:nth-of-type(3),
    #tab-3:checked ~ .tab-panel:nth-of-type(4) { display: block; }
    .generated { margin-top: 2rem; font-size: 0.75rem; color: #666666; }
</style>
"#;

/// Explicit composition of the post-processor and a renderer.
///
/// Every fragment passes through [`MarkupPostProcessor`] before it reaches the renderer;
/// options are forwarded untouched.
pub struct RenderSession<'a, R: Renderer> {
    processor: &'a MarkupPostProcessor,
    renderer: R,
    rng: StdRng,
    fragments_rendered: usize,
    placeholders_substituted: usize,
}

impl<'a, R: Renderer> RenderSession<'a, R> {
    pub fn new(processor: &'a MarkupPostProcessor, renderer: R, rng: StdRng) -> Self {
        Self {
            processor,
            renderer,
            rng,
            fragments_rendered: 0,
            placeholders_substituted: 0,
        }
    }

    pub fn markdown(&mut self, html: impl Into<Fragment>, options: &RenderOptions) -> Result<()> {
        let (fragment, substituted) = self.processor.process_counted(html, &mut self.rng);
        if substituted > 0 {
            tracing::trace!("Substituted {} placeholders", substituted);
        }
        self.fragments_rendered += 1;
        self.placeholders_substituted += substituted;
        self.renderer.render(fragment, options)
    }

    /// 等同 `markdown(html, &RenderOptions::html())`
    pub fn html(&mut self, html: impl Into<Fragment>) -> Result<()> {
        self.markdown(html, &RenderOptions::html())
    }

    pub fn tab(&mut self, label: &str) {
        tracing::debug!("Rendering tab: {}", label);
        self.renderer.begin_tab(label);
    }

    pub fn fragments_rendered(&self) -> usize {
        self.fragments_rendered
    }

    pub fn placeholders_substituted(&self) -> usize {
        self.placeholders_substituted
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::asset_pool::AssetPool;
    use rand::SeedableRng;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(String, RenderOptions)>,
        tabs: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, fragment: Fragment, options: &RenderOptions) -> Result<()> {
            self.calls.push((fragment.into_string(), options.clone()));
            Ok(())
        }

        fn begin_tab(&mut self, label: &str) {
            self.tabs.push(label.to_string());
        }
    }

    fn processor() -> MarkupPostProcessor {
        let pool = AssetPool::from_payloads(vec![("image1.png", b"one".to_vec())]).unwrap();
        MarkupPostProcessor::with_default_class(Arc::new(pool)).unwrap()
    }

    #[test]
    fn test_session_substitutes_before_forwarding() {
        let processor = processor();
        let mut session =
            RenderSession::new(&processor, RecordingRenderer::default(), StdRng::seed_from_u64(1));

        session
            .html(r#"<div class="person-icon"></div><span>Alice</span>"#)
            .unwrap();

        let renderer = session.into_renderer();
        assert_eq!(renderer.calls.len(), 1);
        assert!(renderer.calls[0].0.contains("data:image/png;base64,b25l"));
        assert!(renderer.calls[0].0.ends_with("<span>Alice</span>"));
    }

    #[test]
    fn test_session_forwards_options_unchanged() {
        let processor = processor();
        let mut session =
            RenderSession::new(&processor, RecordingRenderer::default(), StdRng::seed_from_u64(2));
        let options = RenderOptions::default().with_help("tooltip");

        session.markdown("plain text", &options).unwrap();
        session.tab("Engagement");

        assert_eq!(session.fragments_rendered(), 1);
        assert_eq!(session.placeholders_substituted(), 0);
        let renderer = session.into_renderer();
        assert_eq!(renderer.calls[0], ("plain text".to_string(), options));
        assert_eq!(renderer.tabs, vec!["Engagement".to_string()]);
    }

    #[test]
    fn test_page_renderer_escapes_unless_html_allowed() {
        let mut renderer = HtmlPageRenderer::new("Workspace Analytics");
        renderer
            .render(Fragment::from("<b>bold</b>"), &RenderOptions::default())
            .unwrap();
        renderer
            .render(Fragment::from("<b>bold</b>"), &RenderOptions::html())
            .unwrap();

        let page = renderer.finish(Utc::now());
        assert!(page.contains("<p>&lt;b&gt;bold&lt;/b&gt;</p>"));
        assert!(page.contains("<div class=\"block\"><b>bold</b></div>"));
        assert!(page.contains("<title>Workspace Analytics</title>"));
    }

    #[test]
    fn test_page_renderer_groups_blocks_by_tab() {
        let mut renderer = HtmlPageRenderer::new("Dashboard");
        renderer.render(Fragment::from("header"), &RenderOptions::html()).unwrap();
        renderer.begin_tab("Engagement");
        renderer.render(Fragment::from("one"), &RenderOptions::html()).unwrap();
        renderer.begin_tab("Discovery");
        renderer
            .render(Fragment::from("two"), &RenderOptions::html().with_help("hint"))
            .unwrap();

        assert_eq!(renderer.block_count(), 3);
        assert_eq!(renderer.tab_labels(), vec!["Engagement", "Discovery"]);

        let page = renderer.finish(Utc::now());
        assert!(page.contains("<label for=\"tab-1\">Discovery</label>"));
        assert!(page.contains("<div class=\"block\" title=\"hint\">two</div>"));
        assert_eq!(page.matches("<section class=\"tab-panel\">").count(), 2);
        let header_at = page.find(">header<").unwrap();
        let tabs_at = page.find("<div class=\"tabs\">").unwrap();
        assert!(header_at < tabs_at);
    }
}
