//! Interactive form on a terminal.
//!
//! Asks for the five fields one after another, the way the web form lays them
//! out. Prompts go to `prompts` (stderr in the binary) so that stdout carries
//! nothing but the rendered preview.

use mdprev_babel::RawInput;
use std::io::{self, BufRead, Write};

pub const PAGE_TITLE: &str = "Dynamic Markdown Previewer";
pub const PREVIEW_BANNER: &str = "Here is your markdown preview!";

/// Read one form from `input`, writing prompts to `prompts`.
///
/// Single-line fields take one line each. The paragraph takes every line up
/// to the first empty one; its lines are joined with a space. End of input
/// leaves the remaining fields empty.
pub fn collect_form<R: BufRead, W: Write>(input: &mut R, prompts: &mut W) -> io::Result<RawInput> {
    writeln!(prompts, "{PAGE_TITLE}")?;
    writeln!(
        prompts,
        "Please enter your information about your favourite topic\n"
    )?;

    let title = ask_line(input, prompts, "Title of the paragraph: ")?;
    let tagline = ask_line(input, prompts, "Tagline describing the topic: ")?;
    let paragraph = ask_block(
        input,
        prompts,
        "Short paragraph describing your topic (finish with an empty line):",
    )?;
    let highlight = ask_line(
        input,
        prompts,
        "(Optional) Words to highlight in bold, separated by commas: ",
    )?;
    let items = ask_line(input, prompts, "List items separated by commas: ")?;

    Ok(RawInput {
        title,
        tagline,
        paragraph,
        highlight,
        items,
    })
}

fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(prompts, "{label}")?;
    prompts.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

fn ask_block<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    label: &str,
) -> io::Result<String> {
    writeln!(prompts, "{label}")?;
    prompts.flush()?;
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join(" "))
}

/// Next line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
