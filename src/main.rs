use bitcalc::calculate;
use clap::Parser;

const OPERATOR_HELP: &str = "Supported operators:
  +    addition
  -    subtraction
  *    multiplication
  /    division
  %    modulo
  <<   left shift
  >>   right shift
  &    and
  |    or
  ^    xor
  <<<  rotate left
  >>>  rotate right";

/// bitcalc is a command-line calculator for 32-bit integer arithmetic and
/// bitwise operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = OPERATOR_HELP)]
struct Args {
    /// The first operand, a base-10 integer.
    #[arg(allow_hyphen_values = true)]
    operand1: String,

    /// The operator symbol.
    #[arg(allow_hyphen_values = true)]
    operator: String,

    /// The second operand, a base-10 integer.
    #[arg(allow_hyphen_values = true)]
    operand2: String,
}

fn main() {
    let args = Args::parse();

    match calculate(&args.operand1, &args.operator, &args.operand2) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
