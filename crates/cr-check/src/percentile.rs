//! Percentile skill checks under the scope's critical rule.

use cr_mechanics::{
    DiceModifier, PercentileCheck, PercentileKind, PercentileOutcome, RandomSource,
    SuccessPredicate,
};
use cr_output::Params;
use cr_store::ScopeId;

use crate::checker::{CheckReport, Checker};
use crate::error::CheckResult;
use crate::input::resolve_magnitude;

/// A percentile check as typed by a player.
#[derive(Debug, Clone, Default)]
pub struct PercentileRequest {
    /// Skill name (or a literal value when `value` is absent).
    pub skill: String,
    /// Explicit skill value; overrides the sheet lookup.
    pub value: Option<String>,
    /// Scope whose critical rule applies; `None` uses the default rule.
    pub scope: Option<ScopeId>,
    /// Whose sheet to read the skill from.
    pub identity: Option<String>,
    /// Display name used in the output.
    pub name: String,
    /// Bonus or penalty dice.
    pub modifier: DiceModifier,
    /// Comparison used when no critical applies.
    pub predicate: SuccessPredicate,
}

/// The template key for a percentile outcome.
pub fn outcome_key(kind: PercentileKind) -> &'static str {
    match kind {
        PercentileKind::CriticalSuccess => "percentile.critical_success",
        PercentileKind::CriticalFailure => "percentile.critical_failure",
        PercentileKind::Normal { success: true } => "percentile.success",
        PercentileKind::Normal { success: false } => "percentile.failure",
    }
}

impl Checker {
    /// Resolve the skill, roll, classify under the scope's rule, and render.
    pub fn percentile<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        request: &PercentileRequest,
    ) -> CheckResult<CheckReport<PercentileOutcome>> {
        let identity = request.identity.as_deref();
        let magnitude = match &request.value {
            Some(value) => resolve_magnitude(value, identity, self.characters.as_ref()),
            None => resolve_magnitude(&request.skill, identity, self.characters.as_ref()),
        };
        let variant = request
            .scope
            .as_ref()
            .map(|scope| self.rules.get(scope))
            .unwrap_or_default();

        let check = PercentileCheck::new(magnitude, variant)?
            .with_modifier(request.modifier)
            .with_predicate(request.predicate);
        let outcome = check.roll(rng);
        tracing::debug!(
            skill = %request.skill,
            rule = %variant,
            roll = outcome.roll.value,
            kind = %outcome.kind,
            "percentile check"
        );

        let dice = match request.modifier {
            DiceModifier::None => String::new(),
            _ => {
                let candidates: Vec<String> = outcome
                    .roll
                    .candidates()
                    .iter()
                    .map(u32::to_string)
                    .collect();
                format!(" [{}]", candidates.join(", "))
            }
        };
        let params = Params::new()
            .with("name", &request.name)
            .with("skill", request.skill.trim())
            .with("value", check.skill)
            .with("target", outcome.target)
            .with("roll", outcome.roll.value)
            .with("dice", dice)
            .with("rule", variant)
            .with("ranges", &outcome.ranges);

        self.render(outcome_key(outcome.kind), &params, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::SheetCharacters;
    use crate::checker::test_support::checker;
    use crate::error::CheckError;
    use cr_mechanics::{MechError, RuleVariant, ScriptedRolls};

    fn request(skill: &str, scope: Option<&str>) -> PercentileRequest {
        PercentileRequest {
            skill: skill.to_string(),
            scope: scope.map(ScopeId::from),
            identity: Some("u1".to_string()),
            name: "Ayla".to_string(),
            ..PercentileRequest::default()
        }
    }

    fn sheets() -> SheetCharacters {
        SheetCharacters::new()
            .with_skill("u1", "Spot Hidden", 40)
            .with_skill("u1", "Library Use", 70)
    }

    /// Script a d100 result as units face then tens face.
    fn d100(value: u32) -> ScriptedRolls {
        let units = match value % 10 {
            0 => 10,
            u => u,
        };
        let tens = match (value / 10) % 10 {
            0 => 10,
            t => t,
        };
        ScriptedRolls::new(vec![units, tens])
    }

    #[test]
    fn d100_helper_matches_roll() {
        let c = checker(sheets());
        for value in [1, 5, 10, 55, 96, 100] {
            let report = c.percentile(&mut d100(value), &request("50", None)).unwrap();
            assert_eq!(report.outcome.roll.value, value);
        }
    }

    #[test]
    fn normal_success_and_failure() {
        let c = checker(sheets());
        let report = c.percentile(&mut d100(40), &request("Spot Hidden", None)).unwrap();
        assert_eq!(report.key, "percentile.success");
        assert!(report.text.contains("Spot Hidden"));

        let report = c.percentile(&mut d100(41), &request("Spot Hidden", None)).unwrap();
        assert_eq!(report.key, "percentile.failure");
    }

    #[test]
    fn explicit_value_overrides_sheet() {
        let c = checker(sheets());
        let mut req = request("Spot Hidden", None);
        req.value = Some("80".to_string());
        let report = c.percentile(&mut d100(75), &req).unwrap();
        assert_eq!(report.outcome.target, 80);
        assert_eq!(report.key, "percentile.success");
    }

    #[test]
    fn scope_rule_changes_criticals() {
        let c = checker(sheets());
        let scope = ScopeId::from("g1");

        // default (official) with skill 70: 3 is an ordinary success
        let report = c
            .percentile(&mut d100(3), &request("Library Use", Some("g1")))
            .unwrap();
        assert_eq!(report.key, "percentile.success");

        c.rules().set_variant(&scope, RuleVariant::Phased).unwrap();
        let report = c
            .percentile(&mut d100(3), &request("Library Use", Some("g1")))
            .unwrap();
        assert_eq!(report.key, "percentile.critical_success");
    }

    #[test]
    fn low_skill_fumbles_from_96_by_default() {
        let c = checker(sheets());
        let report = c
            .percentile(&mut d100(97), &request("Spot Hidden", Some("g2")))
            .unwrap();
        assert_eq!(report.key, "percentile.critical_failure");

        c.rules().set(&ScopeId::from("g2"), 1).unwrap();
        let report = c
            .percentile(&mut d100(97), &request("Spot Hidden", Some("g2")))
            .unwrap();
        assert_eq!(report.key, "percentile.failure");
    }

    #[test]
    fn bonus_dice_show_candidates() {
        let c = checker(sheets());
        let mut req = request("Spot Hidden", None);
        req.modifier = DiceModifier::bonus(1);
        // units 2, tens 7 then 1: keeps 12
        let mut rng = ScriptedRolls::new(vec![2, 7, 1]);
        let report = c.percentile(&mut rng, &req).unwrap();
        assert_eq!(report.outcome.roll.value, 12);
        assert!(report.text.contains("[72, 12]"));
    }

    #[test]
    fn critical_rolls_show_candidates_too() {
        let c = checker(sheets());
        let mut req = request("Spot Hidden", None);
        req.modifier = DiceModifier::bonus(1);
        // units 1, tens 0 then 5: keeps 01
        let mut rng = ScriptedRolls::new(vec![1, 10, 5]);
        let report = c.percentile(&mut rng, &req).unwrap();
        assert_eq!(report.key, "percentile.critical_success");
        assert!(report.text.contains("[1, 51]"), "{}", report.text);

        req.modifier = DiceModifier::penalty(1);
        // units 8, tens 9 then 2: keeps 98
        let mut rng = ScriptedRolls::new(vec![8, 9, 2]);
        let report = c.percentile(&mut rng, &req).unwrap();
        assert_eq!(report.key, "percentile.critical_failure");
        assert!(report.text.contains("[98, 28]"), "{}", report.text);
    }

    #[test]
    fn unknown_skill_is_invalid() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![1, 1]);
        let err = c.percentile(&mut rng, &request("Occult", None)).unwrap_err();
        assert!(matches!(err, CheckError::Mechanics(MechError::InvalidInput(_))));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn every_kind_has_a_bundled_template() {
        let c = checker(SheetCharacters::new());
        for kind in [
            PercentileKind::CriticalSuccess,
            PercentileKind::CriticalFailure,
            PercentileKind::Normal { success: true },
            PercentileKind::Normal { success: false },
        ] {
            assert!(c.templates().contains(outcome_key(kind)));
        }
    }
}
