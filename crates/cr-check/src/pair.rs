//! Paired-roll (hope/fear) checks.

use cr_mechanics::{PairedAttribute, PairedCheck, PairedOutcome, PairedRoll, RandomSource};
use cr_output::Params;

use crate::checker::{CheckReport, Checker};
use crate::error::{CheckError, CheckResult};
use crate::input::{parse_difficulty, resolve_magnitude};

/// A paired check as typed by a player.
#[derive(Debug, Clone, Default)]
pub struct PairRequest {
    /// First attribute: a number or a skill name.
    pub first: String,
    /// Second attribute: a number or a skill name.
    pub second: String,
    /// Difficulty; must parse as an integer.
    pub difficulty: String,
    /// Whose sheet to read named attributes from.
    pub identity: Option<String>,
    /// Display name used in the output.
    pub name: String,
}

/// The template key for a paired outcome.
pub fn outcome_key(outcome: PairedOutcome) -> &'static str {
    match outcome {
        PairedOutcome::CriticalFailure => "pair.critical_failure",
        PairedOutcome::CriticalSuccess => "pair.critical_success",
        PairedOutcome::Tie => "pair.tie",
        PairedOutcome::HigherSuccess => "pair.higher_success",
        PairedOutcome::HigherFailure => "pair.higher_failure",
        PairedOutcome::LowerSuccess => "pair.lower_success",
        PairedOutcome::LowerFailure => "pair.lower_failure",
    }
}

impl Checker {
    /// Validate, roll, and render a paired check.
    ///
    /// All inputs are validated before any die is drawn.
    pub fn pair<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        request: &PairRequest,
    ) -> CheckResult<CheckReport<PairedRoll>> {
        let difficulty = parse_difficulty(&request.difficulty).ok_or_else(|| {
            CheckError::InvalidInput(format!("invalid difficulty: {}", request.difficulty))
        })?;

        let identity = request.identity.as_deref();
        let first_value = resolve_magnitude(&request.first, identity, self.characters.as_ref());
        let second_value = resolve_magnitude(&request.second, identity, self.characters.as_ref());
        let first = PairedAttribute::new(request.first.trim(), first_value)?;
        let second = PairedAttribute::new(request.second.trim(), second_value)?;

        let roll = PairedCheck::new(first, second, difficulty).roll(rng);
        tracing::debug!(outcome = %roll.outcome, total = roll.total, difficulty, "paired check");

        let params = Params::new()
            .with("name", &request.name)
            .with("attribute1", request.first.trim())
            .with("attribute2", request.second.trim())
            .with("hope_attr", &roll.higher.label)
            .with("fear_attr", &roll.lower.label)
            .with("hope", roll.higher.magnitude)
            .with("fear", roll.lower.magnitude)
            .with("d1", roll.higher_die.value)
            .with("d2", roll.lower_die.value)
            .with("total", roll.total)
            .with("difficulty", difficulty)
            .with("outcome", roll.outcome);

        self.render(outcome_key(roll.outcome), &params, roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::SheetCharacters;
    use crate::checker::test_support::checker;
    use cr_mechanics::{MechError, ScriptedRolls};
    use cr_output::{OutputError, TemplateTable};
    use cr_store::{MemoryBackend, RuleStore};
    use std::sync::Arc;

    fn request(first: &str, second: &str, difficulty: &str) -> PairRequest {
        PairRequest {
            first: first.to_string(),
            second: second.to_string(),
            difficulty: difficulty.to_string(),
            identity: Some("u1".to_string()),
            name: "Ayla".to_string(),
        }
    }

    fn sheets() -> SheetCharacters {
        SheetCharacters::new()
            .with_skill("u1", "INS", 10)
            .with_skill("u1", "MIG", 8)
            .with_skill("u1", "DEX", 0)
    }

    #[test]
    fn every_outcome_has_a_bundled_template() {
        let c = checker(SheetCharacters::new());
        for outcome in [
            PairedOutcome::CriticalFailure,
            PairedOutcome::CriticalSuccess,
            PairedOutcome::Tie,
            PairedOutcome::HigherSuccess,
            PairedOutcome::HigherFailure,
            PairedOutcome::LowerSuccess,
            PairedOutcome::LowerFailure,
        ] {
            assert!(c.templates().contains(outcome_key(outcome)));
        }
    }

    #[test]
    fn higher_failure_below_difficulty() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![7, 2]);
        let report = c.pair(&mut rng, &request("INS", "MIG", "10")).unwrap();
        assert_eq!(report.key, "pair.higher_failure");
        assert_eq!(report.outcome.total, 9);
        assert!(report.text.contains("Ayla"));
        assert!(report.text.contains('9'));
    }

    #[test]
    fn higher_success_on_boundary() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![7, 2]);
        let report = c.pair(&mut rng, &request("INS", "MIG", "9")).unwrap();
        assert_eq!(report.key, "pair.higher_success");
    }

    #[test]
    fn named_attributes_pick_hope_die() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![3, 5]);
        let report = c.pair(&mut rng, &request("MIG", "INS", "6")).unwrap();
        assert_eq!(report.outcome.higher.label, "INS");
        assert_eq!(report.outcome.higher.magnitude, 10);
        assert_eq!(report.key, "pair.lower_success");
    }

    #[test]
    fn criticals_and_tie() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![1, 1]);
        let report = c.pair(&mut rng, &request("10", "10", "2")).unwrap();
        assert_eq!(report.key, "pair.critical_failure");

        let mut rng = ScriptedRolls::new(vec![7, 7]);
        let report = c.pair(&mut rng, &request("10", "10", "999")).unwrap();
        assert_eq!(report.key, "pair.critical_success");

        let mut rng = ScriptedRolls::new(vec![5, 5]);
        let report = c.pair(&mut rng, &request("10", "10", "1")).unwrap();
        assert_eq!(report.key, "pair.tie");
    }

    #[test]
    fn invalid_inputs_draw_nothing() {
        let c = checker(sheets());
        let mut rng = ScriptedRolls::new(vec![4, 4]);

        let err = c.pair(&mut rng, &request("INS", "MIG", "hard")).unwrap_err();
        assert!(matches!(err, CheckError::InvalidInput(_)));

        let err = c.pair(&mut rng, &request("INS", "DEX", "8")).unwrap_err();
        assert!(matches!(err, CheckError::Mechanics(MechError::InvalidInput(_))));

        let err = c.pair(&mut rng, &request("INS", "Luck", "8")).unwrap_err();
        assert!(matches!(err, CheckError::Mechanics(_)));

        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn missing_template_fails_the_check() {
        let c = Checker::new(
            Arc::new(TemplateTable::from_toml_str("[pair]\ntie = \"t\"").unwrap()),
            Arc::new(RuleStore::new(MemoryBackend::new()).unwrap()),
            Arc::new(sheets()),
        );
        let mut rng = ScriptedRolls::new(vec![7, 2]);
        let err = c.pair(&mut rng, &request("INS", "MIG", "9")).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Template(OutputError::TemplateMissing(_))
        ));
    }
}
