use crate::core::renderer::RenderSession;
use crate::core::Renderer;
use crate::dashboard::widgets::{self, Table};
use crate::utils::error::Result;

const SEARCHES_BY_TEAMSPACE: &[(&str, u32, i32, &str, &str)] = &[
    ("General", 250, 5, "Company Announcements", "Latest updates"),
    ("Product", 200, -3, "Product Roadmap", "New features"),
    ("Finance", 180, 2, "Budget Overview", "Quarterly Report"),
    ("Engineering", 150, -1, "Sprint Planning", "Tech Innovations"),
    ("Marketing", 120, 7, "Campaign Metrics", "Ad Performance"),
];

const SEARCHES_BY_CONTENT: &[(&str, u32, u32)] = &[
    ("Budget Forecast", 300, 25),
    ("Product Updates", 280, 0),
    ("Engineering Roadmap", 260, 15),
    ("Marketing Trends", 240, 10),
    ("HR Policies", 220, 0),
];

pub const STALE_CONTENT: &[(&str, u32)] = &[
    ("Company Handbook", 50),
    ("Old Product Page", 38),
    ("Legacy Budget", 32),
    ("Archived Meeting", 27),
    ("Deprecated FAQ", 20),
];

fn stale_content_watch() -> String {
    let max = STALE_CONTENT.iter().map(|(_, days)| *days).max().unwrap_or(0);
    let mut html = String::from(r#"<div class="member-card">"#);
    for (page, days) in STALE_CONTENT {
        html.push_str(&widgets::bar(page, *days, max, "#A8E6CF"));
    }
    html.push_str(r#"<p style="font-size: 0.7rem; color: #666666; margin: 4px 0 0;">Days Since Last Viewed</p>"#);
    html.push_str("</div>");
    html
}

pub fn render<T: Renderer>(session: &mut RenderSession<'_, T>) -> Result<()> {
    session.html(widgets::section_header("Discovery"))?;
    session.html(widgets::stat_card(
        "Total Searches",
        148,
        "↗ +5% more than previous 90 days",
        Some(180),
    ))?;

    session.html(widgets::heading(4, "Searches by Teamspace"))?;
    let mut by_teamspace = Table::new(&[
        "Teamspace",
        "# Searches",
        "Search Trend",
        "Top Searched Page",
        "Top Searches",
    ])
    .compact();
    for (teamspace, searches, trend, top_page, top_search) in SEARCHES_BY_TEAMSPACE {
        by_teamspace.row(vec![
            widgets::page(teamspace),
            searches.to_string(),
            widgets::trend(*trend),
            widgets::page(top_page),
            (*top_search).to_string(),
        ]);
    }
    session.html(by_teamspace.to_html())?;

    session.html(widgets::heading(4, "Searches by Content"))?;
    let mut by_content = Table::new(&["Top Searches", "# Searches", "Click-through Rate"]).compact();
    for (query, searches, ctr) in SEARCHES_BY_CONTENT {
        by_content.row(vec![
            (*query).to_string(),
            searches.to_string(),
            format!("{}%", ctr),
        ]);
    }
    session.html(by_content.to_html())?;

    session.html(widgets::heading(4, "Stale Content Watch"))?;
    session.html(stale_content_watch())
}
