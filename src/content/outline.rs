use serde::Serialize;

use super::DisplayBlock;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub slug: String,
    pub title: String,
}

/// Table of contents of a parsed theory text, with github-style anchors.
pub fn outline(blocks: &[DisplayBlock]) -> Vec<Heading> {
    let mut slugger = github_slugger::Slugger::default();

    blocks
        .iter()
        .filter_map(|block| {
            let level = block.heading_level()?;
            let title = block.text()?;
            Some(Heading {
                level,
                slug: slugger.slug(title),
                title: title.to_string(),
            })
        })
        .collect()
}
