use std::io;
use std::process;

use relcalc::evaluator::evaluate;
use relcalc::parse::parse;
use relcalc::render::render;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut line = String::new();
    if let Err(err) = io::stdin().read_line(&mut line) {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }

    let expr = match parse(line.trim_end()) {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("Parsing error: {}", err);
            process::exit(1);
        }
    };

    match render(&expr) {
        Ok(rendered) => println!("Expression: {}", rendered),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
    match evaluate(&expr) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
