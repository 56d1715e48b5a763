use cr_check::Checker;
use cr_store::ScopeId;

pub fn run(checker: &Checker, scope: &ScopeId, command: &str) -> Result<(), String> {
    let reply = checker
        .rule_command(scope, command)
        .map_err(|e| e.to_string())?;
    println!("{reply}");
    Ok(())
}
