use cr_check::Checker;
use cr_store::ScopeId;

pub fn run(
    checker: &Checker,
    skill: u32,
    variant: Option<i64>,
    scope: Option<&ScopeId>,
) -> Result<(), String> {
    let text = checker
        .describe_ranges(skill, variant, scope)
        .map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
