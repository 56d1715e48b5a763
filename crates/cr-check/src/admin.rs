//! The rule-administration command.
//!
//! `1`-`4` select a critical rule for the scope, `0` restores the default,
//! and anything else prints help along with the scope's current rule.

use cr_mechanics::RuleVariant;
use cr_output::Params;
use cr_store::ScopeId;

use crate::checker::Checker;
use crate::error::CheckResult;

/// A parsed rule command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCommand {
    /// Select a specific variant.
    Set(RuleVariant),
    /// Restore the default variant.
    Reset,
    /// Show help and the current variant.
    Help,
}

impl RuleCommand {
    /// Parse from the first character of the argument.
    pub fn parse(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('1') => Self::Set(RuleVariant::Strict),
            Some('2') => Self::Set(RuleVariant::Official),
            Some('3') => Self::Set(RuleVariant::Phased),
            Some('4') => Self::Set(RuleVariant::Loose),
            Some('0') => Self::Reset,
            _ => Self::Help,
        }
    }
}

impl Checker {
    /// Run a rule command for `scope` and render the reply.
    pub fn rule_command(&self, scope: &ScopeId, text: &str) -> CheckResult<String> {
        let command = RuleCommand::parse(text);
        let (key, params) = match command {
            RuleCommand::Set(variant) => {
                let stored = self.rules.set_variant(scope, variant)?;
                ("rule.set", set_params(stored))
            }
            RuleCommand::Reset => {
                let stored = self.rules.reset(scope)?;
                ("rule.set", set_params(stored))
            }
            RuleCommand::Help => {
                let current = self.rules.get(scope);
                let params = Params::new()
                    .with("rule", current)
                    .with("summary", current.summary())
                    .with("default", RuleVariant::default());
                ("rule.help", params)
            }
        };
        Ok(self.templates.render(key, &params)?)
    }

    /// Describe the critical ranges for `skill`.
    ///
    /// An explicit `variant_id` must be 1-4; otherwise the scope's rule (or
    /// the default, without a scope) is used.
    pub fn describe_ranges(
        &self,
        skill: u32,
        variant_id: Option<i64>,
        scope: Option<&ScopeId>,
    ) -> CheckResult<String> {
        let variant = match variant_id {
            Some(id) => RuleVariant::from_id(id)?,
            None => scope.map(|s| self.rules.get(s)).unwrap_or_default(),
        };
        let params = Params::new()
            .with("skill", skill)
            .with("rule", variant)
            .with("ranges", variant.ranges(skill));
        Ok(self.templates.render("rule.ranges", &params)?)
    }
}

fn set_params(variant: RuleVariant) -> Params {
    Params::new()
        .with("rule", variant)
        .with("summary", variant.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::SheetCharacters;
    use crate::checker::test_support::checker;
    use crate::error::CheckError;
    use cr_mechanics::MechError;

    #[test]
    fn parse_commands() {
        assert_eq!(RuleCommand::parse("1"), RuleCommand::Set(RuleVariant::Strict));
        assert_eq!(RuleCommand::parse("4 please"), RuleCommand::Set(RuleVariant::Loose));
        assert_eq!(RuleCommand::parse(" 3"), RuleCommand::Set(RuleVariant::Phased));
        assert_eq!(RuleCommand::parse("0"), RuleCommand::Reset);
        assert_eq!(RuleCommand::parse("5"), RuleCommand::Help);
        assert_eq!(RuleCommand::parse("help"), RuleCommand::Help);
        assert_eq!(RuleCommand::parse(""), RuleCommand::Help);
    }

    #[test]
    fn set_and_reset() {
        let c = checker(SheetCharacters::new());
        let scope = ScopeId::from("g1");

        let reply = c.rule_command(&scope, "4").unwrap();
        assert!(reply.contains("loose"));
        assert_eq!(c.rules().get(&scope), RuleVariant::Loose);

        let reply = c.rule_command(&scope, "0").unwrap();
        assert!(reply.contains("official"));
        assert_eq!(c.rules().get(&scope), RuleVariant::Official);
    }

    #[test]
    fn help_shows_current_rule() {
        let c = checker(SheetCharacters::new());
        let scope = ScopeId::from("g1");
        c.rule_command(&scope, "3").unwrap();
        let reply = c.rule_command(&scope, "?").unwrap();
        assert!(reply.contains("Current rule: phased"));
        assert_eq!(c.rules().get(&scope), RuleVariant::Phased);
    }

    #[test]
    fn ranges_description() {
        let c = checker(SheetCharacters::new());
        let text = c.describe_ranges(60, Some(3), None).unwrap();
        assert!(text.contains("critical 1-5, fumble 100"));

        let scope = ScopeId::from("g1");
        c.rules().set(&scope, 1).unwrap();
        let text = c.describe_ranges(30, None, Some(&scope)).unwrap();
        assert!(text.contains("strict"));
        assert!(text.contains("critical 1, fumble 100"));

        let err = c.describe_ranges(30, Some(9), None).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Mechanics(MechError::InvalidRuleVariant(9))
        ));
    }
}
