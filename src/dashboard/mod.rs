//! Presentation layer: the static mock-data workspace dashboard.
//!
//! Every fragment goes through [`RenderSession`], so person cells can use the bare
//! `person-icon` placeholder and still come out with an avatar.

pub mod collaboration;
pub mod discovery;
pub mod engagement;
pub mod widgets;

use crate::core::renderer::{escape_html, RenderSession};
use crate::core::Renderer;
use crate::utils::error::Result;
use rand::Rng;

pub const TABS: [&str; 3] = ["Engagement", "Collaboration", "Discovery"];

pub const STYLESHEET: &str = r#"<style>
    .stApp {
        font-family: sans-serif;
        background-color: #121212;
        color: #e0e0e0;
    }
    .main .block-container {
        padding-top: 1rem;
        padding-bottom: 1rem;
    }
    .member-card {
        background-color: #262626;
        border-radius: 4px;
        padding: 10px;
        margin-bottom: 20px;
        box-shadow: 0 1px 3px rgba(0,0,0,0.3);
        color: #D4D4D4;
    }
    .dropdown {
        border: 1px solid #444444;
        border-radius: 4px;
        padding: 5px 10px;
        font-size: 0.9rem;
        background-color: #1B2028;
        color: #2483E2;
    }
    .person-icon {
        width: 20px;
        height: 20px;
        background-color: #555555;
        border-radius: 50%;
        margin-right: 10px;
        display: inline-block;
        vertical-align: middle;
    }
    .page-icon {
        width: 20px;
        height: 20px;
        background-color: #555555;
        border-radius: 5px;
        margin-right: 10px;
        display: inline-block;
        vertical-align: middle;
    }
    .icon-text {
        display: inline-block;
        vertical-align: middle;
    }
    @media (max-width: 992px) {
        .main .block-container {
            padding-top: 0.5rem;
            padding-bottom: 0.5rem;
        }
    }
</style>"#;

pub fn header(title: &str) -> String {
    format!(
        concat!(
            r#"<div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;">"#,
            "<h2>{}</h2>",
            r#"<button style="background-color: #2d2d2d; border: 1px solid #444444; border-radius: 4px; padding: 5px 10px; color: #e0e0e0;">Have feedback?</button>"#,
            "</div>"
        ),
        escape_html(title)
    )
}

/// Renders the whole dashboard; `rng` drives the randomized mock values.
pub fn render_dashboard<T: Renderer, R: Rng + ?Sized>(
    session: &mut RenderSession<'_, T>,
    title: &str,
    rng: &mut R,
) -> Result<()> {
    session.html(STYLESHEET)?;
    session.html(header(title))?;

    let [engagement_tab, collaboration_tab, discovery_tab] = TABS;

    session.tab(engagement_tab);
    engagement::render(session, rng)?;

    session.tab(collaboration_tab);
    collaboration::render(session)?;

    session.tab(discovery_tab);
    discovery::render(session)
}
