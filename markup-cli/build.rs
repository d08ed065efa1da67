use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the scopes accepted by src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const IMPORT_SCOPES: &[&str] = &["body", "root"];

fn import_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("scope")
                .long("scope")
                .value_parser(clap::builder::PossibleValuesParser::new(IMPORT_SCOPES))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("keep-blank-text")
                .long("keep-blank-text")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and compare HTML documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(import_args(
            Command::new("normalize")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        ))
        .subcommand(import_args(
            Command::new("compare")
                .arg(
                    Arg::new("left")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("right")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                ),
        ));

    generate_to(Bash, &mut cmd, "markup", &outdir)?;
    generate_to(Zsh, &mut cmd, "markup", &outdir)?;
    generate_to(Fish, &mut cmd, "markup", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
