use bigratio::{Rational, RationalError};
use log::{error, info};

fn run() -> Result<(), RationalError> {
    let first = Rational::from_i64s(25893, 51647)?;
    let second = Rational::from_i64s(-46008, 51647)?;
    let third = Rational::from_i64s(62750931, 51808256)?;
    info!("{first}");
    info!("{second}");
    info!("{third}");

    let product = second.times(&third);
    info!("{}", product.numerator());
    info!("{}", product.denominator());
    info!("{product}");

    let difference = first.minus(&product);
    info!("{difference}");

    // Operands are left untouched by arithmetic
    error!("{first}");
    error!("{second}");
    error!("{third}");
    error!("{product}");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
