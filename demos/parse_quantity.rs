//! Parse quantities the way a numeric input field would.
//!
//! Usage: parse_quantity "24 in" "90 deg" "3.5 m/s^2" ...

use fieldcurve::units::parse_quantity;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["24in", "90 deg", "3.5 m/s^2", "25 degC", "45 cdeg", "12 furlongs"]
            .map(String::from)
            .to_vec();
    }

    for input in &inputs {
        match parse_quantity(input) {
            Ok(q) => println!("{input:>12}  =>  {q}"),
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
    }
}
