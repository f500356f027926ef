use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;

use vecmat::Organization;
use vecmat_cli::commands::{self, BinaryOp};

fn operand_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("VECMAT_LOG", "error,vecmat=info"))
        .init();

    let matches = Command::new("vecmat")
        .version(clap::crate_version!())
        .about("Immutable vector and matrix arithmetic demos")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("vector")
                .about("Add, subtract and dot two vectors, and report their magnitudes")
                .arg(operand_arg("lhs", "Left vector, comma separated (e.g. 1,2,3)"))
                .arg(operand_arg("rhs", "Right vector, comma separated (e.g. 4,5,6)")),
        )
        .subcommand(
            Command::new("matrix")
                .about("Add and subtract two matrices")
                .arg(operand_arg(
                    "lhs",
                    "Left matrix, rows separated by ';' (e.g. 1,2,3;4,5,6)",
                ))
                .arg(operand_arg(
                    "rhs",
                    "Right matrix, rows separated by ';' (e.g. 7,8,9;10,11,12)",
                )),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate one operation on two operands of any kind")
                .arg(operand_arg("lhs", "Left operand, a vector or a matrix"))
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(["add", "sub", "dot"]),
                )
                .arg(operand_arg("rhs", "Right operand, a vector or a matrix")),
        )
        .subcommand(
            Command::new("organization")
                .about("Print an organization record")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .required(true)
                        .help("Organization name"),
                )
                .arg(
                    Arg::new("address")
                        .long("address")
                        .required(true)
                        .help("Physical address"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .required(true)
                        .help("Contact email"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("vector", sub_m)) => run("vector", sub_m, |lhs, rhs, out| {
            commands::run_vector(lhs, rhs, out)
        }),
        Some(("matrix", sub_m)) => run("matrix", sub_m, |lhs, rhs, out| {
            commands::run_matrix(lhs, rhs, out)
        }),
        Some(("eval", sub_m)) => {
            let op_name = sub_m.get_one::<String>("op").map(String::as_str).unwrap_or("add");
            let op = BinaryOp::from_name(op_name)
                .ok_or_else(|| anyhow::anyhow!("Unknown operation: {}", op_name))?;
            run("eval", sub_m, |lhs, rhs, out| {
                commands::run_eval(lhs, op, rhs, out)
            })
        }
        Some(("organization", sub_m)) => {
            let field = |name: &str| sub_m.get_one::<String>(name).cloned().unwrap_or_default();
            let org = Organization::new(field("name"), field("address"), field("email"));
            commands::run_organization(&org, &mut std::io::stdout().lock())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn run<F>(label: &str, matches: &ArgMatches, f: F) -> Result<()>
where
    F: FnOnce(&str, &str, &mut std::io::StdoutLock<'static>) -> Result<()>,
{
    let lhs = matches.get_one::<String>("lhs").map(String::as_str).unwrap_or_default();
    let rhs = matches.get_one::<String>("rhs").map(String::as_str).unwrap_or_default();
    log::debug!("[vecmat::{}] lhs={:?} rhs={:?}", label, lhs, rhs);

    match f(lhs, rhs, &mut std::io::stdout().lock()) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", label, e);
            std::process::exit(1)
        }
    }
}
