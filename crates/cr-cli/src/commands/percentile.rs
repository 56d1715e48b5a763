use cr_check::{Checker, PercentileRequest};

pub fn run(checker: &Checker, request: &PercentileRequest, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::rng(seed);
    let report = checker
        .percentile(&mut rng, request)
        .map_err(|e| e.to_string())?;
    println!("{}", report.text);
    Ok(())
}
