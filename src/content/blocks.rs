use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// One display unit of a theory text, with its marker stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DisplayBlock {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    /// rendered with a leading bullet glyph
    BulletItem(String),
    BoldParagraph(String),
    PlainParagraph(String),
    /// rendered as a line break
    BlankLine,
}

impl DisplayBlock {
    /// Heading depth, `None` for anything that is not a heading.
    pub fn heading_level(&self) -> Option<usize> {
        match self {
            DisplayBlock::Heading1(_) => Some(1),
            DisplayBlock::Heading2(_) => Some(2),
            DisplayBlock::Heading3(_) => Some(3),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DisplayBlock::Heading1(t)
            | DisplayBlock::Heading2(t)
            | DisplayBlock::Heading3(t)
            | DisplayBlock::BulletItem(t)
            | DisplayBlock::BoldParagraph(t)
            | DisplayBlock::PlainParagraph(t) => Some(t),
            DisplayBlock::BlankLine => None,
        }
    }
}

type Rule = fn(&str) -> Option<DisplayBlock>;

// first match wins, the plain paragraph rule always matches
const RULES: [Rule; 7] = [
    heading1,
    heading2,
    heading3,
    bullet,
    bold,
    blank,
    plain,
];

fn heading1(line: &str) -> Option<DisplayBlock> {
    line.strip_prefix("# ").map(|t| DisplayBlock::Heading1(t.to_string()))
}

fn heading2(line: &str) -> Option<DisplayBlock> {
    line.strip_prefix("## ").map(|t| DisplayBlock::Heading2(t.to_string()))
}

fn heading3(line: &str) -> Option<DisplayBlock> {
    line.strip_prefix("### ").map(|t| DisplayBlock::Heading3(t.to_string()))
}

fn bullet(line: &str) -> Option<DisplayBlock> {
    line.strip_prefix("- ").map(|t| DisplayBlock::BulletItem(t.to_string()))
}

// both markers must be present without overlapping, so "**" and "***" are plain text
fn bold(line: &str) -> Option<DisplayBlock> {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"^\*\*(.*)\*\*$").expect("bold pattern is valid"))
        .captures(line)
        .map(|caps| DisplayBlock::BoldParagraph(caps[1].to_string()))
}

fn blank(line: &str) -> Option<DisplayBlock> {
    line.trim().is_empty().then_some(DisplayBlock::BlankLine)
}

fn plain(line: &str) -> Option<DisplayBlock> {
    Some(DisplayBlock::PlainParagraph(line.to_string()))
}

fn classify(rules: &[Rule], line: &str) -> DisplayBlock {
    rules
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or_else(|| DisplayBlock::PlainParagraph(line.to_string()))
}

/// Splits a theory text into one block per line, empty lines included.
pub fn parse(theory_content: &str) -> Vec<DisplayBlock> {
    theory_content
        .split('\n')
        .map(|line| classify(&RULES, line))
        .collect()
}
