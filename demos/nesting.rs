//! Shows how nested styling of the same family keeps the outer effect.

use std::io::Write;

use termwrap::{Escaper, Result};

fn main() -> Result<()> {
    let mut stdout = std::io::stdout();

    let inner = Escaper::new("red").red()?.into_string();
    let outer = Escaper::new(format!("blue {} still blue", inner)).blue()?;
    writeln!(stdout, "{}", outer)?;
    writeln!(stdout, "{:?}", outer.as_str())?;

    let bold = Escaper::new("bold").bold()?.into_string();
    let mixed = Escaper::new(format!("underlined {} underlined", bold))
        .underline()?
        .on_yellow()?;
    writeln!(stdout, "{}", mixed)?;
    writeln!(stdout, "{:?}", mixed.as_str())?;

    Ok(())
}
