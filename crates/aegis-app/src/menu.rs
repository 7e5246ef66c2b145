//! Start menu shown before the simulation runs.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run,
    Exit,
}

const BANNER: &str = "\
================================================
      AEGIS POINT-DEFENSE ENGAGEMENT SYSTEM
================================================
 MAIN MENU:
 [1] Run engagement simulation
 [2] Exit
================================================";

/// Print the menu and read one line. Only `1` starts the run; anything
/// else, including end of input, exits.
pub fn prompt<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<MenuChoice> {
    writeln!(output, "{BANNER}")?;
    write!(output, " Your choice > ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(if line.trim() == "1" {
        MenuChoice::Run
    } else {
        MenuChoice::Exit
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choose(input: &str) -> MenuChoice {
        let mut out = Vec::new();
        prompt(Cursor::new(input), &mut out).unwrap()
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(choose("1\n"), MenuChoice::Run);
        assert_eq!(choose("  1  \r\n"), MenuChoice::Run);
        assert_eq!(choose("2\n"), MenuChoice::Exit);
        assert_eq!(choose("run\n"), MenuChoice::Exit);
        assert_eq!(choose(""), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_prints_banner() {
        let mut out = Vec::new();
        prompt(Cursor::new("2\n"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1] Run engagement simulation"));
        assert!(text.ends_with("Your choice > "));
    }
}
