use crate::core::renderer::RenderSession;
use crate::core::Renderer;
use crate::dashboard::widgets::{self, Leaderboard, Table};
use crate::utils::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;

const ACTIVE_MEMBERS: &[(&str, u32, &str)] = &[
    ("Alice", 1010, "General"),
    ("Bob", 990, "Product"),
    ("Charlie", 800, "Marketing"),
    ("Dana", 500, "Finance"),
    ("Eve", 210, "Engineering"),
];

const ACTIVE_CONTRIBUTORS: &[(&str, u32, &str)] = &[
    ("Zoe", 500, "Marketing"),
    ("Rebecca", 565, "Analytics"),
    ("Fig", 367, "Data"),
    ("Nicole Wu", 278, "HR"),
    ("Stephanie", 109, "Strategy"),
];

const ACTIVE_CREATORS: &[(&str, u32, &str)] = &[
    ("Rebecca", 50, "Engineering"),
    ("Fig", 43, "Marketing"),
    ("Zoe", 32, "Analytics"),
    ("Sohrab A...", 16, "Data"),
    ("Nicole Wu", 9, "HR"),
];

const ACTIVITY_OVER_TIME: &[(&str, [u32; 10])] = &[
    ("Active Members over time", [9, 9, 7, 8, 10, 15, 17, 21, 26, 32]),
    ("Active Contributors over time", [8, 10, 11, 12, 15, 15, 15, 17, 17, 18]),
    ("Active Creators over time", [4, 4, 4, 4, 4, 5, 5, 4, 4, 5]),
];

const PAGES: &[&str] = &[
    "General", "Product", "Finance", "People", "Engineering", "Marketing",
    "Analytics", "Data", "HR", "Strategy", "Operations", "BizOps",
];

const TOP_MEMBERS: &[&str] = &[
    "Alice", "Bob", "Charlie", "Dana", "Eve", "Frank", "Grace", "Hank", "Ivy", "Jack",
];

const TOP_CONTRIBUTORS: &[&str] = &[
    "Zoe", "Liam", "Emma", "Noah", "Olivia", "Ava", "William", "Sophia", "Mason", "Isabella",
];

/// One randomized row of the content engagement table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEngagement {
    pub page: &'static str,
    pub top_member: &'static str,
    pub top_contributor: &'static str,
    pub scroll_depth: u32,
    pub avg_minutes: u32,
}

pub fn sample_page_engagement<R: Rng + ?Sized>(rng: &mut R) -> Vec<PageEngagement> {
    PAGES
        .iter()
        .map(|&page| PageEngagement {
            page,
            scroll_depth: rng.gen_range(0..=100),
            avg_minutes: rng.gen_range(1..=15),
            top_member: TOP_MEMBERS.choose(&mut *rng).copied().unwrap_or("Alice"),
            top_contributor: TOP_CONTRIBUTORS.choose(&mut *rng).copied().unwrap_or("Zoe"),
        })
        .collect()
}

/// 排行榜下方的三張活躍度趨勢圖
fn activity_charts() -> String {
    let parts: Vec<(f32, String)> = ACTIVITY_OVER_TIME
        .iter()
        .map(|(title, series)| (1.0, widgets::sparkline(title, series)))
        .collect();
    widgets::columns(&parts)
}

pub fn render<T: Renderer, R: Rng + ?Sized>(
    session: &mut RenderSession<'_, T>,
    rng: &mut R,
) -> Result<()> {
    session.html(widgets::section_header("Member Engagement"))?;
    session.html(widgets::stat_card(
        "Total Members",
        98,
        "↗ 118% more than previous 90 days",
        None,
    ))?;

    let boards = [
        Leaderboard {
            title: "Active Members",
            total: 32,
            metric: "# Sessions",
            rows: ACTIVE_MEMBERS,
        },
        Leaderboard {
            title: "Active Contributors",
            total: 18,
            metric: "# Edits",
            rows: ACTIVE_CONTRIBUTORS,
        },
        Leaderboard {
            title: "Active Creators",
            total: 5,
            metric: "# Additions",
            rows: ACTIVE_CREATORS,
        },
    ];
    let parts: Vec<(f32, String)> = boards.iter().map(|b| (1.0, b.to_html())).collect();
    session.html(widgets::columns(&parts))?;
    session.html(activity_charts())?;

    session.html(widgets::heading(3, "Content Engagement"))?;
    session.html(widgets::columns(&[
        (1.0, widgets::stat_card("Total Pages", 12, " Active Pages: 6", None)),
        (1.0, widgets::stat_card("Total Sessions", 126, " Active Sessions: 56", None)),
    ]))?;

    let mut table = Table::new(&[
        "Page Name",
        "Top Member",
        "Top Contributor",
        "Avg Scroll Depth",
        "Avg Time Spent (min)",
    ]);
    for row in sample_page_engagement(rng) {
        table.row(vec![
            widgets::page(row.page),
            widgets::person(row.top_member),
            widgets::person(row.top_contributor),
            widgets::progress_bar(row.scroll_depth),
            row.avg_minutes.to_string(),
        ]);
    }
    session.html(table.to_html())
}
