//! Memo templates, one per drafting mode

use super::signals::{excerpt, find_trait};
use doctrine_model::Trait;

const RISK_EXCERPT_CHARS: usize = 100;
const CRISIS_EXCERPT_CHARS: usize = 150;

/// Interpolation inputs shared by all templates
#[derive(Debug, Clone)]
pub(crate) struct DraftContext<'a> {
    pub(crate) prompt: &'a str,
    pub(crate) date: String,
    pub(crate) tone: Vec<&'static str>,
    pub(crate) principles: Vec<&'static str>,
    pub(crate) traits: &'a [Trait],
}

pub(crate) fn board_memo(ctx: &DraftContext<'_>) -> String {
    let DraftContext {
        prompt, date, tone, principles, ..
    } = ctx;
    let risk_trait = find_trait(ctx.traits, "risk");

    let tone_pair = tone[..2].join(", ");
    let heuristic = risk_trait.map_or_else(
        || "calculated risk-taking".to_string(),
        |t| t.name.to_lowercase(),
    );
    let mitigation = risk_trait.map_or_else(
        || "- Implement staged rollout approach".to_string(),
        |t| format!("- {}", excerpt(&t.description, RISK_EXCERPT_CHARS)),
    );
    let (first, second) = (principles[0], principles[1]);

    format!(
        r"BOARD MEMORANDUM
Date: {date}
Re: {prompt}

EXECUTIVE SUMMARY

This memo addresses the strategic considerations outlined in the prompt. Based on 
our established decision-making framework ({tone_pair} approach), 
I recommend the following course of action.

STRATEGIC CONTEXT

{first}. Our current market position requires us to balance immediate 
tactical wins with long-term strategic positioning. The decision framework here 
draws from our core heuristics around {heuristic}.

RECOMMENDATION

1. Immediate Actions
   - Assess current resource allocation
   - Validate assumptions with market data
   - Establish clear success metrics

2. Medium-term Strategy
   - {second}
   - Maintain operational flexibility
   - Monitor competitive response

3. Risk Mitigation
   {mitigation}
   - Establish clear decision gates
   - Maintain strategic optionality

CONCLUSION

This approach aligns with our established doctrine while maintaining the flexibility 
to adapt as conditions evolve. I recommend board approval to proceed with Phase 1.

[Founder Signature]"
    )
}

pub(crate) fn investment_eval(ctx: &DraftContext<'_>) -> String {
    let DraftContext {
        prompt, date, tone, principles, ..
    } = ctx;
    let framework = tone[..3].join(", ");
    let thesis = principles[0].to_lowercase();

    format!(
        r"INVESTMENT EVALUATION
Date: {date}
Opportunity: {prompt}

OVERVIEW

This evaluation applies our investment framework ({framework}) 
to assess strategic fit and expected value creation.

STRATEGIC FIT ANALYSIS

Market Position: The opportunity aligns with our thesis around {thesis}.

Synergy Assessment:
• Operational: Medium-High potential for integration
• Strategic: Strong alignment with long-term vision
• Cultural: Requires validation through due diligence

FINANCIAL MODELING

Base Case: Assumes moderate market growth and standard integration timeline
Bull Case: Accelerated synergy capture and market expansion
Bear Case: Extended integration period with competitive pressure

RISK ASSESSMENT

Key Risks:
1. Integration complexity
2. Market timing
3. Competitive response
4. Regulatory considerations

Mitigation Strategies:
• Staged acquisition approach
• Clear integration roadmap
• Dedicated integration team
• Regular milestone reviews

RECOMMENDATION

PROCEED with due diligence phase. The strategic rationale is compelling, but 
execution risk requires careful validation of operational assumptions.

Next Steps:
1. 60-day due diligence period
2. Integration planning workstream
3. Board approval for final terms"
    )
}

pub(crate) fn pr_fallout(ctx: &DraftContext<'_>) -> String {
    let DraftContext {
        prompt, date, tone, principles, ..
    } = ctx;
    let crisis_pattern = find_trait(ctx.traits, "crisis").map_or_else(
        || "Maintain calm, decisive leadership throughout the response cycle.".to_string(),
        |t| {
            format!(
                "Crisis Response Pattern:\n{}",
                excerpt(&t.description, CRISIS_EXCERPT_CHARS)
            )
        },
    );
    let value = principles[2];
    let (lead, manner) = (tone[0], tone[1]);

    format!(
        r#"PR FALLOUT SIMULATION
Date: {date}
Scenario: {prompt}

IMMEDIATE RESPONSE (0-24 hours)

Public Statement:
"We acknowledge the situation and are conducting a thorough review. {value} 
is core to our values. We will share findings as soon as our assessment is complete."

Internal Communication:
• Brief leadership team immediately
• Prepare employee FAQ
• Activate crisis response protocol

STAKEHOLDER MANAGEMENT (24-72 hours)

Investors: Direct outreach to key stakeholders with factual briefing
Media: Controlled engagement through designated spokesperson
Employees: Town hall to address concerns and maintain morale
Customers: Proactive communication about any service impact

STRATEGIC POSITIONING (Week 1-2)

Narrative Framework:
1. Acknowledge the issue directly
2. Demonstrate accountability
3. Outline corrective actions
4. Reinforce long-term vision

{crisis_pattern}

LONG-TERM RECOVERY (Month 1+)

• Implement systemic improvements
• Rebuild stakeholder confidence through consistent execution
• Use as case study for organizational learning
• Monitor sentiment and adjust messaging as needed

PROBABILITY ASSESSMENT

Best Case: Issue contained within 48 hours, minimal lasting impact
Base Case: 2-week news cycle, moderate reputation impact, full recovery in 3-6 months
Worst Case: Extended controversy, regulatory scrutiny, 12+ month recovery period

RECOMMENDATION

Activate crisis protocol immediately. The {lead} approach requires us to 
get ahead of the narrative while maintaining {manner} communication with all stakeholders."#
    )
}
