//! Narrative dominance playbook renderer
//!
//! Five thematic sections of fixed prose; only the audience framing and the
//! optional constraints block vary with input.

use crate::date::long_date;
use crate::error::{require_text, RenderError};
use crate::layout::{join_blocks, join_sections};
use crate::lexicon::audience_framing;
use chrono::NaiveDate;
use doctrine_model::Audience;

const CORE_NARRATIVE: &str = r"1. PUBLIC IDENTITY POSITIONING

Core Narrative:
Position as a visionary builder who combines technical depth with strategic 
foresight. The narrative centers on solving fundamental problems rather than 
chasing trends.

Key Messaging Pillars:
• Technical credibility through demonstrated expertise
• Long-term thinking over short-term optimization
• Principled decision-making even when unpopular
• Builder identity over pure operator";

const CONTROVERSY_ARCS: &str = r"2. STRATEGIC CONTROVERSY ARCS

Controversy Strategy:
Controlled controversy establishes thought leadership and generates organic 
reach. The key is choosing battles that reinforce core positioning.

Recommended Controversy Themes:
• Challenge industry orthodoxy on [specific technical/strategic topic]
• Take contrarian stance on [emerging trend]
• Publicly question [widely accepted practice]

Controversy Execution Framework:
1. Build credibility foundation first (3-6 months)
2. Choose controversy that aligns with core expertise
3. Present data-driven contrarian view
4. Engage thoughtfully with critics
5. Let supporters amplify organically

Risk Management:
• Avoid political/social controversies outside core domain
• Maintain professional tone even in heated debates
• Have exit strategy if controversy escalates unexpectedly";

const MEDIA_ANGLES: &str = r#"3. MEDIA ANGLES

Primary Media Hooks:
• "The [Industry] Founder Who [Unique Approach]"
• "Why [Contrarian View] Will Define the Next Decade"
• "Inside [Company]'s Unconventional Strategy"

Tier 1 Target Publications:
• Industry-specific: [Relevant trade publications]
• Business: WSJ, Bloomberg, Forbes
• Tech: TechCrunch, The Information, Stratechery

Story Seeding Strategy:
1. Build relationships with 3-5 key journalists
2. Provide exclusive insights/data periodically
3. Position as go-to expert for [specific domain]
4. Leverage earned media for owned content amplification

Content Calendar:
• Monthly: Deep-dive blog post or essay
• Quarterly: Major announcement or milestone
• Bi-annually: Thought leadership piece in tier 1 publication"#;

const CULTURAL_NARRATIVE: &str = r"4. LONG-TERM CULTURAL NARRATIVE PLACEMENT

10-Year Narrative Arc:
Year 1-2: Establish technical credibility and builder identity
Year 3-5: Become recognized thought leader in [domain]
Year 6-8: Influence industry direction and standards
Year 9-10: Legacy positioning as category-defining founder

Cultural Touchpoints:
• Speaking engagements at tier 1 conferences
• Advisory roles with influential organizations
• Mentorship of next-generation founders
• Contribution to industry standards/frameworks

Legacy Architecture:
The long-term narrative positions you not just as a successful founder, but as 
someone who fundamentally shaped how [industry/domain] evolved. This requires 
consistent reinforcement of core themes over years, not months.

Narrative Consistency Checkpoints:
• Does this action reinforce core positioning?
• Will this matter in 5 years?
• Does this build or dilute the legend?";

const ADVERSARY_POSITIONING: &str = r#"5. ADVERSARY POSITIONING STRATEGY

Strategic Adversaries:
Identify 2-3 clear competitive or ideological adversaries. This creates narrative 
tension and clarifies your positioning through contrast.

Adversary Selection Criteria:
• Large enough to be credible opponent
• Represents opposing philosophy/approach
• Engagement elevates your positioning
• Conflict is sustainable long-term

Engagement Framework:
• Never attack personally, always attack ideas/approaches
• Use data and logic, not emotion
• Position as principled disagreement, not vendetta
• Let supporters fight the ground war

Competitive Narrative:
"While [Adversary] focuses on [their approach], we believe the future belongs 
to [your approach] because [fundamental reason]."

De-escalation Protocol:
If adversary engagement becomes counterproductive:
1. Acknowledge valid points
2. Reframe as complementary approaches
3. Shift focus to shared industry challenges
4. Maintain high ground"#;

const IMPLEMENTATION_TIMELINE: &str = r"IMPLEMENTATION TIMELINE

Month 1-3: Foundation
• Establish core messaging
• Build initial content library
• Identify key media relationships

Month 4-6: Amplification
• Launch first controversy arc
• Secure tier 2 media placements
• Build social proof

Month 7-12: Dominance
• Tier 1 media placements
• Speaking engagements
• Industry influence activities";

const MEASUREMENT_FRAMEWORK: &str = r"MEASUREMENT FRAMEWORK

Leading Indicators:
• Media mentions and sentiment
• Social media engagement and follower growth
• Speaking invitation quality
• Inbound partnership/investment interest

Lagging Indicators:
• Brand recognition surveys
• Industry influence (standards, advisory roles)
• Talent attraction quality
• Valuation multiple vs. peers";

/// Render a narrative playbook
///
/// The constraints block appears only when `constraints` is non-blank; its
/// text is emitted as given.
///
/// # Errors
/// [`RenderError::InvalidInput`] when `title` is blank.
pub fn render_playbook(
    title: &str,
    audience: &Audience,
    constraints: &str,
    date: NaiveDate,
) -> Result<String, RenderError> {
    require_text("playbook title", title)?;

    let date = long_date(date);
    let header = format!(
        "NARRATIVE DOMINANCE PLAYBOOK\n{title}\nTarget Audience: {audience}\nGenerated: {date}"
    );

    let identity = identity_section(audience, constraints);
    let sections = join_sections(&[
        identity.as_str(),
        CONTROVERSY_ARCS,
        MEDIA_ANGLES,
        CULTURAL_NARRATIVE,
        ADVERSARY_POSITIONING,
    ]);

    Ok(join_blocks(&[
        header.as_str(),
        sections.as_str(),
        IMPLEMENTATION_TIMELINE,
        MEASUREMENT_FRAMEWORK,
        "END OF PLAYBOOK",
    ]))
}

fn identity_section(audience: &Audience, constraints: &str) -> String {
    let framing = audience_framing(audience);
    let constraints = if constraints.trim().is_empty() {
        String::new()
    } else {
        format!("Strategic Constraints:\n{constraints}\n")
    };
    format!(
        "{CORE_NARRATIVE}\n\nAudience-Specific Framing ({audience}):\n{framing}\n\n{constraints}"
    )
}

/// Whether a playbook body carries the constraints block
#[must_use]
pub fn has_constraints_block(playbook: &str) -> bool {
    playbook.contains("\nStrategic Constraints:\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HEAVY_RULE, LIGHT_RULE};
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn header_lines() {
        let doc = render_playbook("Category King", &Audience::Media, "", date()).unwrap();
        assert!(doc.starts_with(&format!(
            "NARRATIVE DOMINANCE PLAYBOOK\nCategory King\nTarget Audience: Media\nGenerated: March 7, 2024\n\n{HEAVY_RULE}\n\n1. PUBLIC IDENTITY POSITIONING\n"
        )));
        assert!(doc.ends_with(&format!("{HEAVY_RULE}\n\nEND OF PLAYBOOK")));
    }

    #[test]
    fn framing_follows_audience() {
        let doc = render_playbook("T", &Audience::Employees, "", date()).unwrap();
        assert!(doc.contains(
            "Audience-Specific Framing (Employees):\nInspire with vision while maintaining transparency about challenges. Position as builder-in-chief.\n"
        ));
    }

    #[test]
    fn constraints_block_layout() {
        let doc = render_playbook("T", &Audience::Investors, "No politics.", date()).unwrap();
        assert!(doc.contains(&format!(
            "long-term value creation.\n\nStrategic Constraints:\nNo politics.\n\n\n{LIGHT_RULE}\n\n2. STRATEGIC CONTROVERSY ARCS"
        )));
        assert!(has_constraints_block(&doc));
    }

    #[test]
    fn blank_constraints_are_omitted() {
        let doc = render_playbook("T", &Audience::Investors, " \n ", date()).unwrap();
        assert!(!has_constraints_block(&doc));
        assert!(doc.contains(&format!(
            "long-term value creation.\n\n\n\n{LIGHT_RULE}\n\n2. STRATEGIC"
        )));
    }

    #[test]
    fn section_order() {
        let doc = render_playbook("T", &Audience::Media, "", date()).unwrap();
        let positions: Vec<_> = [
            "1. PUBLIC IDENTITY",
            "2. STRATEGIC CONTROVERSY",
            "3. MEDIA ANGLES",
            "4. LONG-TERM CULTURAL",
            "5. ADVERSARY POSITIONING",
            "IMPLEMENTATION TIMELINE",
            "MEASUREMENT FRAMEWORK",
        ]
        .iter()
        .map(|heading| doc.find(heading).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = render_playbook("  ", &Audience::Media, "", date()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
