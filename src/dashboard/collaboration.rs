use crate::core::renderer::RenderSession;
use crate::core::Renderer;
use crate::dashboard::widgets::{self, Table};
use crate::utils::error::Result;

/// 互動組成，原本以甜甜圈圖呈現，這裡改為比例條
///
/// 每筆為 (標籤, 權重, 顏色)；權重僅作相對比例，不要求加總為 100
struct InteractionMix {
    slices: &'static [(&'static str, u32, &'static str)],
}

impl InteractionMix {
    fn max_share(&self) -> u32 {
        self.slices.iter().map(|(_, share, _)| *share).max().unwrap_or(0)
    }

    fn to_html(&self) -> String {
        let max = self.max_share();
        let mut html = String::from(r#"<div class="member-card">"#);
        for (label, share, color) in self.slices {
            html.push_str(&widgets::bar(label, *share, max, color));
        }
        html.push_str("</div>");
        html
    }
}

struct Section {
    title: &'static str,
    headline: &'static str,
    total: u32,
    note: &'static str,
    mix: InteractionMix,
    table: fn() -> Table,
}

fn team_specific_table() -> Table {
    const ROWS: &[(&str, u32, u32, i32, &str)] = &[
        ("Product Roadmap", 12, 256, 35, "Alice"),
        ("Product Updates", 15, 340, -20, "Bob"),
        ("Feature Releases", 17, 512, 45, "Charlie"),
        ("Beta Testing", 11, 478, -10, "Dana"),
        ("Product Design", 14, 690, 80, "Eve"),
        ("User Feedback", 16, 820, 120, "Frank"),
        ("Quality Assurance", 13, 305, -15, "Grace"),
        ("Product Metrics", 18, 765, 60, "Hank"),
    ];

    let mut table = Table::new(&[
        "Current Team Page",
        "# Unique Collaborators",
        "Total Interactions",
        "Interactions Trend",
        "Top Collaborator",
    ]);
    for (page, collaborators, interactions, trend, top) in ROWS {
        table.row(vec![
            widgets::page(page),
            collaborators.to_string(),
            interactions.to_string(),
            widgets::trend(*trend),
            widgets::person(top),
        ]);
    }
    table
}

fn cross_team_table() -> Table {
    const ROWS: &[(&str, &str, &str, &str, u32)] = &[
        ("Product", "Product Roadmap", "Marketing", "Alice", 980),
        ("Engineering", "Sprint Overview", "Product", "Bob", 865),
        ("Finance", "Budget Report", "Operations", "Charlie", 750),
        ("HR", "Employee Handbook", "People", "Dana", 620),
        ("Analytics", "Data Insights", "Strategy", "Eve", 510),
    ];

    let mut table = Table::new(&[
        "Teamspace",
        "Shared Content",
        "Shared with",
        "Top Collaborator",
        "Interactions",
    ]);
    for (teamspace, content, shared_with, top, interactions) in ROWS {
        table.row(vec![
            widgets::page(teamspace),
            widgets::page(content),
            widgets::page(shared_with),
            widgets::person(top),
            interactions.to_string(),
        ]);
    }
    table
}

fn cross_product_table() -> Table {
    const ROWS: &[(&str, u32, &str)] = &[
        ("Engineering", 25, "Github"),
        ("Product", 22, "Figma"),
        ("Marketing", 18, "Slack"),
        ("Finance", 14, "Github"),
        ("General", 10, "Figma"),
    ];

    let mut table = Table::new(&["Teamspace", "Number of Integrations", "Top Integration"]);
    for (teamspace, integrations, integration) in ROWS {
        // 整合服務沿用 person-icon，以隨機頭像呈現
        table.row(vec![
            widgets::page(teamspace),
            integrations.to_string(),
            widgets::person(integration),
        ]);
    }
    table
}

fn sections() -> [Section; 3] {
    [
        Section {
            title: "Team-Specific",
            headline: "Active Team Interactions",
            total: 1745,
            note: "↗ 426% more than previous 90 days",
            mix: InteractionMix {
                slices: &[
                    ("Edits", 30, "#7DA7C7"),
                    ("Comments", 20, "#8FBED6"),
                    ("Reactions", 15, "#9FD3E6"),
                    ("Mentions", 10, "#AADFF0"),
                    ("Shares", 10, "#B3E5F2"),
                    ("Kanbans", 9, "#BCE9F4"),
                    ("Tasks", 6, "#C6EDF6"),
                    ("Databases", 5, "#D0F2F9"),
                ],
            },
            table: team_specific_table,
        },
        Section {
            title: "Cross-Team",
            headline: "Cross Team Interactions",
            total: 454,
            note: "↗ 67% more than previous 90 days",
            mix: InteractionMix {
                slices: &[
                    ("Edits", 5, "#A8E6CF"),
                    ("Comments", 25, "#B2F2D2"),
                    ("Reactions", 20, "#BBF8D7"),
                    ("Mentions", 20, "#C4FFD9"),
                    ("Shares", 10, "#CCFFDF"),
                    ("Kanbans", 5, "#D5FFE3"),
                    ("Tasks", 5, "#DEFFE7"),
                    ("Databases", 10, "#E7FFEB"),
                ],
            },
            table: cross_team_table,
        },
        Section {
            title: "Cross-Product",
            headline: "Cross Product Integrations",
            total: 110,
            note: "↗ 27% more than previous 90 days",
            mix: InteractionMix {
                slices: &[
                    ("Figma", 60, "#FFF9C4"),
                    ("Slack", 30, "#FFF59D"),
                    ("Github", 10, "#FFF176"),
                ],
            },
            table: cross_product_table,
        },
    ]
}

pub fn render<T: Renderer>(session: &mut RenderSession<'_, T>) -> Result<()> {
    for section in sections() {
        session.html(widgets::section_header(section.title))?;
        session.html(widgets::columns(&[
            (
                4.5,
                widgets::stat_card(section.headline, section.total, section.note, Some(240)),
            ),
            (2.0, section.mix.to_html()),
        ]))?;
        session.html((section.table)().to_html())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_widths(html: &str) -> Vec<u32> {
        html.match_indices("width: ")
            .filter_map(|(at, _)| {
                let rest = &html[at + "width: ".len()..];
                rest.split('%').next()?.parse().ok()
            })
            .collect()
    }

    #[test]
    fn test_interaction_bars_scale_against_largest_share() {
        for section in sections() {
            let mix = &section.mix;
            assert!(!mix.slices.is_empty(), "{}", section.title);
            assert!(mix.slices.iter().all(|(_, share, _)| *share > 0), "{}", section.title);

            let max = mix.max_share();
            let expected: Vec<u32> = mix.slices.iter().map(|(_, share, _)| share * 100 / max).collect();
            assert_eq!(bar_widths(&mix.to_html()), expected, "{}", section.title);
            assert!(expected.contains(&100));
        }
    }

    #[test]
    fn test_team_specific_keeps_relative_weights() {
        let [team, _, _] = sections();
        let total: u32 = team.mix.slices.iter().map(|(_, share, _)| share).sum();
        assert_eq!(total, 105);
        assert_eq!(team.mix.slices[0], ("Edits", 30, "#7DA7C7"));
    }

    #[test]
    fn test_cross_product_mix_lists_integrations() {
        let [_, _, product] = sections();
        let html = product.mix.to_html();

        for integration in ["Figma", "Slack", "Github"] {
            assert!(html.contains(integration), "missing {}", integration);
        }
        assert!(!html.contains("Kanbans"));
        assert_eq!(product.mix.slices.len(), 3);
        assert!(html.contains("#FFF9C4"));
    }

    #[test]
    fn test_section_headlines() {
        let cards: Vec<String> = sections()
            .iter()
            .map(|s| widgets::stat_card(s.headline, s.total, s.note, Some(240)))
            .collect();

        assert!(cards[1].contains(r#"Cross Team Interactions <span style="float: right;">454</span>"#));
        assert!(cards[1].contains("&gt;↗ 67% more"));
        assert!(cards[2].contains(r#"Cross Product Integrations <span style="float: right;">110</span>"#));
        assert!(cards[2].contains("&gt;↗ 27% more"));
    }

    #[test]
    fn test_tables_use_person_placeholders_for_collaborators() {
        let html = team_specific_table().to_html();
        assert_eq!(html.matches(widgets::PERSON_ICON).count(), 8);
        assert_eq!(html.matches(widgets::PAGE_ICON).count(), 8);

        let html = cross_team_table().to_html();
        assert_eq!(html.matches(widgets::PERSON_ICON).count(), 5);
        assert_eq!(html.matches(widgets::PAGE_ICON).count(), 15);
    }
}
