//! Prints every supported attribute applied to its own name.
//!
//! Set `TERMWRAP_LOG=path` to log attribute lookups to a file.

use std::io::{IsTerminal, Write};

use termwrap::{AttributeRegistry, Result};

fn main() -> Result<()> {
    if let Ok(path) = std::env::var("TERMWRAP_LOG") {
        termwrap::init_logger(path)?;
    }

    let mut stdout = std::io::stdout();
    let styled = stdout.is_terminal();
    let registry = AttributeRegistry::standard();

    let mut family = None;
    for attr in registry.attributes() {
        let attr = attr?;
        if family != Some(attr.family()) {
            family = Some(attr.family());
            writeln!(stdout, "\n{}:", attr.family())?;
        }
        let label = if styled {
            attr.wrap(attr.name())
        } else {
            attr.name().to_string()
        };
        writeln!(stdout, "  {}", label)?;
    }

    if styled {
        let mut line = String::new();
        for index in 0..=255u8 {
            let cell = termwrap::Escaper::new("  ").background_256(index);
            line.push_str(cell.as_str());
            if index % 16 == 15 {
                writeln!(stdout, "{}", line)?;
                line.clear();
            }
        }
    }

    Ok(())
}
