//! Markup builders shared by the dashboard tabs.

use crate::core::renderer::escape_html;

pub const PERSON_ICON: &str = r#"<div class="person-icon"></div>"#;
pub const PAGE_ICON: &str = r#"<div class="page-icon"></div>"#;

const POSITIVE: &str = "#4caf50";
const NEGATIVE: &str = "red";

pub fn person(name: &str) -> String {
    format!(
        r#"{}<span class="icon-text">{}</span>"#,
        PERSON_ICON,
        escape_html(name)
    )
}

pub fn page(name: &str) -> String {
    format!(r#"{}<span class="icon-text">{}</span>"#, PAGE_ICON, escape_html(name))
}

pub fn heading(level: u8, text: &str) -> String {
    format!("<h{0}>{1}</h{0}>", level, escape_html(text))
}

/// 區段標題，右側附「Last 90 Days」下拉樣式
pub fn section_header(title: &str) -> String {
    format!(
        concat!(
            r#"<div style="display: flex; justify-content: space-between; align-items: center;">"#,
            "{}",
            r#"<span class="dropdown">Last 90 Days <span style="font-size: 14px;">⌄</span></span>"#,
            "</div>"
        ),
        heading(3, title)
    )
}

pub fn stat_card(title: &str, value: u32, note: &str, min_height: Option<u32>) -> String {
    let style = match min_height {
        Some(px) => format!("width: 100%; min-height: {}px;", px),
        None => "width: 100%;".to_string(),
    };
    format!(
        concat!(
            r#"<div class="member-card" style="{}">"#,
            r#"<h2 style="margin: 0;">{} <span style="float: right;">{}</span></h2>"#,
            r#"<p style="font-size: 0.9rem; color: {}; margin-top: 1px;">&gt;{}</p>"#,
            "</div>"
        ),
        style,
        escape_html(title),
        value,
        POSITIVE,
        escape_html(note)
    )
}

/// Signed percentage, green when non-negative.
pub fn trend(percent: i32) -> String {
    let color = if percent < 0 { NEGATIVE } else { POSITIVE };
    format!(r#"<span style="color: {};">{:+}%</span>"#, color, percent)
}

pub fn progress_bar(percent: u32) -> String {
    let percent = percent.min(100);
    format!(
        concat!(
            r#"<div style="width: 100%; background-color: #555555; height: 10px; border-radius: 5px; margin-bottom: 2px;">"#,
            r#"<div style="width: {0}%; background-color: #4caf50; height: 10px; border-radius: 5px;"></div>"#,
            "</div>",
            r#"<span style="font-size: 0.8rem;">{0}%</span>"#
        ),
        percent
    )
}

/// Horizontal bar scaled against `max`, used where a chart would otherwise go.
pub fn bar(label: &str, value: u32, max: u32, color: &str) -> String {
    let width = if max == 0 { 0 } else { value.saturating_mul(100) / max };
    format!(
        concat!(
            r#"<div style="display: flex; align-items: center; margin-bottom: 4px; font-size: 12px;">"#,
            r#"<div style="flex: 0 0 30%; color: #999999;">{}</div>"#,
            r#"<div style="flex: 1;"><div style="width: {}%; background-color: {}; height: 8px; border-radius: 4px;"></div></div>"#,
            r#"<div style="flex: 0 0 3rem; text-align: right;">{}</div>"#,
            "</div>"
        ),
        escape_html(label),
        width.min(100),
        color,
        value
    )
}

/// 時間序列，原本為面積折線圖，這裡以等寬直條呈現，最高值為滿高
pub fn sparkline(title: &str, values: &[u32]) -> String {
    let max = values.iter().copied().max().unwrap_or(0);
    let mut html = format!(
        r#"<div class="member-card"><h4 style="margin: 0 0 8px; color: #D4D4D4;">{}</h4>"#,
        escape_html(title)
    );
    html.push_str(r#"<div style="display: flex; align-items: flex-end; gap: 2px; height: 80px;">"#);
    for value in values {
        let height = if max == 0 { 0 } else { value.saturating_mul(100) / max };
        html.push_str(&format!(
            r#"<div class="spark" title="{}" style="flex: 1; height: {}%; background-color: #e0f0ff; border-top: 2px solid #80bfff;"></div>"#,
            value, height
        ));
    }
    html.push_str("</div></div>");
    html
}

/// 並排欄位，權重對應 flex-grow
pub fn columns(parts: &[(f32, String)]) -> String {
    let mut html = String::from(r#"<div style="display: flex; gap: 1rem; align-items: flex-start;">"#);
    for (weight, content) in parts {
        html.push_str(&format!(r#"<div style="flex: {} 1 0;">{}</div>"#, weight, content));
    }
    html.push_str("</div>");
    html
}

/// Leaderboard card: header row plus one flex row per entry.
pub struct Leaderboard<'a> {
    pub title: &'a str,
    pub total: u32,
    pub metric: &'a str,
    pub rows: &'a [(&'a str, u32, &'a str)],
}

impl Leaderboard<'_> {
    pub fn to_html(&self) -> String {
        let cell = |content: String| format!(r#"<div style="flex: 1; text-align: left;">{}</div>"#, content);

        let mut html = format!(
            r#"<div class="member-card"><h4 style="margin-bottom: 10px;">{} <span style="float: right;">{}</span></h4>"#,
            escape_html(self.title),
            self.total
        );
        html.push_str(r#"<div style="display: flex; align-items: center; font-weight: bold; margin-bottom: 10px;">"#);
        html.push_str(&cell("Name".to_string()));
        html.push_str(&cell(escape_html(self.metric)));
        html.push_str(&cell("Top Teamspace".to_string()));
        html.push_str("</div>");

        for (name, count, teamspace) in self.rows {
            html.push_str(r#"<div style="display: flex; align-items: center; margin-bottom: 5px;">"#);
            html.push_str(&cell(person(name)));
            html.push_str(&cell(count.to_string()));
            html.push_str(&cell(page(teamspace)));
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}

#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    font_size: Option<u32>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| escape_html(h)).collect(),
            rows: Vec::new(),
            font_size: None,
        }
    }

    pub fn compact(mut self) -> Self {
        self.font_size = Some(12);
        self
    }

    /// 儲存格內容為已組好的標記，呼叫端負責跳脫
    pub fn row(&mut self, cells: Vec<String>) -> &mut Self {
        self.rows.push(cells);
        self
    }

    pub fn to_html(&self) -> String {
        let font = self
            .font_size
            .map(|px| format!(" font-size: {}px;", px))
            .unwrap_or_default();

        let mut html = String::from(
            r#"<table style="width: 100%; border-collapse: collapse; margin-top: 20px;">"#,
        );
        html.push_str(&format!(
            r#"<tr style="text-align: left; border-bottom: 1px solid #444444;{}">"#,
            font
        ));
        for header in &self.headers {
            html.push_str(&format!(r#"<th style="padding: 8px;">{}</th>"#, header));
        }
        html.push_str("</tr>");

        let last = self.rows.len().saturating_sub(1);
        for (index, cells) in self.rows.iter().enumerate() {
            let border = if index == last { "" } else { " border-bottom: 1px solid #444444;" };
            html.push_str(&format!(r#"<tr style="{}{}">"#, border.trim_start(), font));
            for cell in cells {
                html.push_str(&format!(r#"<td style="padding: 8px;">{}</td>"#, cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }
}
