//! Section rules shared by every document

/// Rule between major blocks
pub const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════════";

/// Rule between numbered sections
pub const LIGHT_RULE: &str =
    "───────────────────────────────────────────────────────────────────";

/// Join sections with a light rule on its own paragraph
pub(crate) fn join_sections(sections: &[&str]) -> String {
    sections.join(&format!("\n\n{LIGHT_RULE}\n\n"))
}

/// Join blocks with a heavy rule on its own paragraph
pub(crate) fn join_blocks(blocks: &[&str]) -> String {
    blocks.join(&format!("\n\n{HEAVY_RULE}\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_sixty_seven_wide() {
        assert_eq!(HEAVY_RULE.chars().count(), 67);
        assert_eq!(LIGHT_RULE.chars().count(), 67);
    }

    #[test]
    fn join_places_rule_between_paragraphs() {
        assert_eq!(join_sections(&["a", "b"]), format!("a\n\n{LIGHT_RULE}\n\nb"));
        assert_eq!(join_blocks(&["a"]), "a");
    }
}
