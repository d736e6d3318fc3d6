//! Twin draft synthesizer
//!
//! Combines artifact signals, an optional blueprint and a prompt into one of
//! three memo templates.

mod signals;
mod templates;

pub use signals::{excerpt, find_trait, principles, tone_keywords};

use crate::date::long_date;
use crate::error::{require_text, RenderError};
use chrono::NaiveDate;
use doctrine_model::{Artifact, DraftMode, Trait};
use templates::DraftContext;

/// Synthesize a founder-voice draft
///
/// `traits` may be empty; templates that look up a trait fall back to static
/// text when none matches.
///
/// # Errors
/// [`RenderError::InvalidInput`] when `prompt` is blank.
pub fn synthesize_draft(
    prompt: &str,
    mode: DraftMode,
    artifacts: &[Artifact],
    traits: &[Trait],
    date: NaiveDate,
) -> Result<String, RenderError> {
    require_text("prompt", prompt)?;

    let ctx = DraftContext {
        prompt,
        date: long_date(date),
        tone: tone_keywords(artifacts),
        principles: principles(artifacts),
        traits,
    };

    Ok(match mode {
        DraftMode::BoardMemo => templates::board_memo(&ctx),
        DraftMode::InvestmentEval => templates::investment_eval(&ctx),
        DraftMode::PrFallout => templates::pr_fallout(&ctx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn board_memo_without_traits_uses_fallbacks() {
        let memo = synthesize_draft("Expand to Europe", DraftMode::BoardMemo, &[], &[], date())
            .unwrap();
        assert!(memo.starts_with("BOARD MEMORANDUM\nDate: March 7, 2024\nRe: Expand to Europe\n"));
        assert!(memo.contains("framework (strategic, decisive approach), \n"));
        assert!(memo.contains("core heuristics around calculated risk-taking.\n"));
        assert!(memo.contains("3. Risk Mitigation\n   - Implement staged rollout approach\n"));
        assert!(memo.contains("   - Prioritize long-term value creation\n"));
        assert!(memo.ends_with("[Founder Signature]"));
    }

    #[test]
    fn board_memo_quotes_risk_trait() {
        let traits = vec![Trait::new("Risk Tolerance Model", "x".repeat(120))];
        let memo =
            synthesize_draft("Raise", DraftMode::BoardMemo, &[], &traits, date()).unwrap();
        assert!(memo.contains("core heuristics around risk tolerance model.\n"));
        assert!(memo.contains(&format!("   - {}...\n", "x".repeat(100))));
    }

    #[test]
    fn investment_eval_uses_three_tone_words() {
        let eval = synthesize_draft("Acme", DraftMode::InvestmentEval, &[], &[], date()).unwrap();
        assert!(eval.starts_with("INVESTMENT EVALUATION\nDate: March 7, 2024\nOpportunity: Acme\n"));
        assert!(eval.contains("framework (strategic, decisive, transparent) \n"));
        assert!(eval.contains("thesis around maintain strategic clarity.\n"));
    }

    #[test]
    fn pr_fallout_crisis_trait() {
        let without =
            synthesize_draft("Leak", DraftMode::PrFallout, &[], &[], date()).unwrap();
        assert!(without.contains(
            "\n\nMaintain calm, decisive leadership throughout the response cycle.\n\n"
        ));

        let traits = vec![Trait::new("Crisis Response Patterns", "Own it in public.")];
        let with = synthesize_draft("Leak", DraftMode::PrFallout, &[], &traits, date()).unwrap();
        assert!(with.contains("Crisis Response Pattern:\nOwn it in public....\n"));
        assert!(with.contains("review. Communicate with transparency \nis core"));
        assert!(with.ends_with(
            "The strategic approach requires us to \nget ahead of the narrative while maintaining decisive communication with all stakeholders."
        ));
    }

    #[test]
    fn pr_fallout_cuts_crisis_trait_at_150_chars() {
        let description = "0123456789".repeat(20);
        let traits = vec![Trait::new("Crisis Response Patterns", description.clone())];
        let pr = synthesize_draft("Leak", DraftMode::PrFallout, &[], &traits, date()).unwrap();

        assert!(pr.contains(&format!(
            "Crisis Response Pattern:\n{}...\n",
            &description[..150]
        )));
        assert!(!pr.contains(&description[..151]));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = synthesize_draft(" ", DraftMode::PrFallout, &[], &[], date()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
