use cr_check::{Checker, PairRequest};

pub fn run(checker: &Checker, request: &PairRequest, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng(seed);
    let report = checker.pair(&mut rng, request).map_err(|e| e.to_string())?;
    println!("{}", report.text);
    Ok(())
}
