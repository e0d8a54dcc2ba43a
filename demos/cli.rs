use polydiff::{ParseOptions, Polynomial};
use std::io::{BufRead, BufReader, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = if std::env::args().any(|arg| arg == "--strict") {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };

    let stdin = std::io::stdin();
    let mut lines = BufReader::new(stdin.lock()).lines();

    println!("Enter a polynomial, for example: 3x^2 + 2x - 5 + 6y^3");
    print!("Polynomial: ");
    std::io::stdout().flush()?;
    let expression = lines.next().transpose()?.unwrap_or_default();
    let polynomial: Polynomial = polydiff::parse_with(&expression, &options)?;

    print!("Differentiate with respect to: ");
    std::io::stdout().flush()?;
    let name = lines.next().transpose()?.unwrap_or_default();
    let derivative = polynomial.derivative_by_name(&name)?;

    let name = name.trim().to_lowercase();
    println!("d({})/d{} = {}", polynomial, name, derivative);

    Ok(())
}
