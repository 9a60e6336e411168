//! Built-in factor categories.
//!
//! Option order runs from least to most risky, so a higher index always
//! means a larger contribution.

use crate::errors::ScopeResult;
use crate::models::{FactorCategory, FactorQuestion};

pub const VULNERABILITY_MAX_SCORE: u32 = 15;
pub const TECHNICAL_IMPACT_MAX_SCORE: u32 = 15;
pub const BUSINESS_IMPACT_MAX_SCORE: u32 = 12;
pub const THREAT_AGENT_MAX_SCORE: u32 = 14;

pub fn vulnerability() -> ScopeResult<FactorCategory> {
    FactorCategory::new(
        "Vulnerability Factors",
        vec![
            FactorQuestion::new(
                "Ease of Discovery:",
                ["Automated tools available.", "Easy.", "Difficult.", "Impossible."],
            ),
            FactorQuestion::new(
                "Ease of Exploitation:",
                ["Automated tools available.", "Easy.", "Difficult.", "Theory only."],
            ),
            FactorQuestion::new(
                "Awareness of Vulnerability:",
                ["Publicly known.", "Hidden.", "Unknown."],
            ),
            FactorQuestion::new(
                "Detection in IDS/IPS:",
                [
                    "Not logged.",
                    "Logged without review.",
                    "Logged and reviewed.",
                    "Active detection in application.",
                ],
            ),
        ],
    )
}

pub fn technical_impact() -> ScopeResult<FactorCategory> {
    FactorCategory::new(
        "Technical Impact Factors",
        vec![
            FactorQuestion::new(
                "Loss of Confidentiality:",
                [
                    "Nothing disclosed.",
                    "Non-sensitive data disclosed.",
                    "Sensitive data disclosed.",
                    "All data disclosed.",
                ],
            ),
            FactorQuestion::new(
                "Loss of Integrity:",
                [
                    "Nothing corrupted.",
                    "Minimal data corrupted.",
                    "Sensitive data corrupted.",
                    "All data corrupted.",
                ],
            ),
            FactorQuestion::new(
                "Loss of Availability:",
                [
                    "Nothing interrupted.",
                    "Secondary services interrupted.",
                    "Primary services interrupted.",
                    "All services interrupted.",
                ],
            ),
            FactorQuestion::new(
                "Loss of Accountability:",
                [
                    "The attack is fully traceable to an individual.",
                    "The attack is possibly traceable.",
                    "Attack is anonymous.",
                ],
            ),
        ],
    )
}

pub fn business_impact() -> ScopeResult<FactorCategory> {
    FactorCategory::new(
        "Business Impact Factors",
        vec![
            FactorQuestion::new(
                "Financial Damage Assessment:",
                [
                    "Minor effect on annual profits.",
                    "Major effect on annual profits.",
                    "Bankruptcy.",
                ],
            ),
            FactorQuestion::new(
                "Reputational Damage Assessment:",
                ["Minimal damage.", "Loss of a major account.", "Brand damage."],
            ),
            FactorQuestion::new("Non-Compliance Status:", ["Minor violation.", "Major violation."]),
            FactorQuestion::new(
                "Privacy Violation Level:",
                [
                    "One individual.",
                    "Hundreds of people.",
                    "Thousands of people.",
                    "Millions of people.",
                ],
            ),
        ],
    )
}

pub fn threat_agent() -> ScopeResult<FactorCategory> {
    FactorCategory::new(
        "Threat Agent Factors",
        vec![
            FactorQuestion::new(
                "Skills Required for Attacker:",
                [
                    "Advanced penetration testing skills.",
                    "Script kiddie.",
                    "Minimal computer and network knowledge.",
                    "No knowledge.",
                ],
            ),
            FactorQuestion::new(
                "Motive of an Attacker:",
                ["No reward or personal gain.", "Possible reward.", "High reward."],
            ),
            FactorQuestion::new(
                "Level of Access:",
                [
                    "Fully expensive resources required.",
                    "Special access to tools is required.",
                    "No resources required.",
                ],
            ),
            FactorQuestion::new(
                "Population:",
                [
                    "System administrators.",
                    "Intranet users.",
                    "Authenticated users.",
                    "Anonymous users.",
                ],
            ),
        ],
    )
}

/// All four categories in assessment order
pub fn all() -> ScopeResult<Vec<FactorCategory>> {
    Ok(vec![vulnerability()?, technical_impact()?, business_impact()?, threat_agent()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scores_match_weightings() {
        assert_eq!(vulnerability().unwrap().max_possible_score(), VULNERABILITY_MAX_SCORE);
        assert_eq!(technical_impact().unwrap().max_possible_score(), TECHNICAL_IMPACT_MAX_SCORE);
        assert_eq!(business_impact().unwrap().max_possible_score(), BUSINESS_IMPACT_MAX_SCORE);
        assert_eq!(threat_agent().unwrap().max_possible_score(), THREAT_AGENT_MAX_SCORE);
    }

    #[test]
    fn test_every_category_has_four_questions() {
        for category in all().unwrap() {
            assert_eq!(category.questions().len(), 4, "{}", category.name());
        }
    }
}
