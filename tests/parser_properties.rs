//! Property tests for the theory markup parser.

use lesson::content::{parse, DisplayBlock};
use proptest::prelude::*;

fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^\n]{0,40}",
        "[^\n]{0,20}".prop_map(|t| format!("# {}", t)),
        "[^\n]{0,20}".prop_map(|t| format!("## {}", t)),
        "[^\n]{0,20}".prop_map(|t| format!("- {}", t)),
        "[^\n]{0,20}".prop_map(|t| format!("**{}**", t)),
        "[ \t]{0,4}",
    ]
}

proptest! {
    #[test]
    fn one_block_per_line(lines in prop::collection::vec(arb_line(), 1..30)) {
        let text = lines.join("\n");
        prop_assert_eq!(parse(&text).len(), lines.len());
    }

    #[test]
    fn parse_is_deterministic(text in "(?s).{0,200}") {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn heading_marker_is_stripped_verbatim(text in "[^\n]{0,40}") {
        prop_assert_eq!(parse(&format!("# {}", text)), vec![DisplayBlock::Heading1(text.clone())]);
        prop_assert_eq!(parse(&format!("## {}", text)), vec![DisplayBlock::Heading2(text.clone())]);
        prop_assert_eq!(parse(&format!("### {}", text)), vec![DisplayBlock::Heading3(text)]);
    }

    #[test]
    fn bullet_marker_is_stripped_verbatim(text in "[^\n]{0,40}") {
        prop_assert_eq!(parse(&format!("- {}", text)), vec![DisplayBlock::BulletItem(text)]);
    }

    #[test]
    fn bold_markers_are_stripped_verbatim(text in "[^\n]{0,40}") {
        prop_assert_eq!(parse(&format!("**{}**", text)), vec![DisplayBlock::BoldParagraph(text)]);
    }

    #[test]
    fn unmarked_lines_stay_plain(text in "[a-zA-Z0-9][^\n]{0,40}") {
        prop_assert_eq!(parse(&text), vec![DisplayBlock::PlainParagraph(text.clone())]);
    }
}
