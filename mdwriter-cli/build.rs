use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs, reduced to what completions need.
// Build scripts can't access src/ modules.
fn build_command() -> Command {
    let input = || {
        Arg::new("input")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    Command::new("mdwriter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert tag syntax to Markdown and analyze Markdown files")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_parser(["auto", "always", "never"])
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input().required(false))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("save").long("save").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("stats")
                .arg(input())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["console", "json"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("save").long("save").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("preview")
                .arg(input())
                .arg(Arg::new("lines").long("lines").short('n')),
        )
        .subcommand(Command::new("guide"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_command();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdwriter", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdwriter", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdwriter", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
