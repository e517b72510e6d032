use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the field flags and formats from src/main.rs and mdprev-babel.
// Build scripts can't access src/ modules, so they are duplicated here.
const FIELD_FLAGS: &[&str] = &["title", "tagline", "paragraph", "highlight", "items"];
const FORMATS: &[&str] = &["html", "json", "markdown"];

fn output_args() -> [Arg; 2] {
    [
        Arg::new("to")
            .long("to")
            .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
            .value_hint(ValueHint::Other),
        Arg::new("output")
            .long("output")
            .short('o')
            .value_hint(ValueHint::FilePath),
    ]
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut render = Command::new("render").arg(
        Arg::new("input")
            .long("input")
            .short('i')
            .value_hint(ValueHint::FilePath),
    );
    for flag in FIELD_FLAGS {
        render = render.arg(Arg::new(*flag).long(*flag).value_hint(ValueHint::Other));
    }

    let mut cmd = Command::new("mdprev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a title, tagline, paragraph and item list into Markdown")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("set").long("set").action(ArgAction::Append))
        .subcommand(render.args(output_args()))
        .subcommand(Command::new("prompt").args(output_args()));

    generate_to(Bash, &mut cmd, "mdprev", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdprev", &outdir)?;
    generate_to(Fish, &mut cmd, "mdprev", &outdir)?;

    Ok(())
}
