use std::io::{BufRead, Write};

use crate::games::japanesejoker::{JokerError, Result};

/// Prints `prompt` and reads one trimmed line. End of input is an error since
/// the game cannot continue without a player.
pub fn get_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(JokerError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Keeps prompting until `accept` returns a value. Rejected lines print
/// `retry` and ask again; they are never errors.
pub fn prompt_until<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retry: &str,
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = get_input(input, output, prompt)?;
    loop {
        if let Some(value) = accept(&line) {
            return Ok(value);
        }
        writeln!(output, "{}", retry)?;
        line = get_input(input, output, prompt)?;
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_get_input_trims() {
        let mut input = Cursor::new("  Red Joker \n");
        let mut output: Vec<u8> = vec![];
        let line = get_input(&mut input, &mut output, "card: ").unwrap();
        assert_eq!(line, "Red Joker");
        assert_eq!(String::from_utf8(output).unwrap(), "card: ");
    }

    #[test]
    fn test_get_input_end_of_input() {
        let mut input = Cursor::new("");
        let mut output: Vec<u8> = vec![];
        assert!(matches!(
            get_input(&mut input, &mut output, "card: "),
            Err(JokerError::InputClosed)
        ));
    }

    #[test]
    fn test_prompt_until_retries() {
        let mut input = Cursor::new("x\n12\n7\n");
        let mut output: Vec<u8> = vec![];
        let value = prompt_until(&mut input, &mut output, "n: ", "try again", |line| {
            line.parse::<i32>().ok().filter(|n| *n < 10)
        })
        .unwrap();
        assert_eq!(value, 7);
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("try again").count(), 2);
    }

    #[test]
    fn test_prompt_until_runs_out_of_input() {
        let mut input = Cursor::new("nope\n");
        let mut output: Vec<u8> = vec![];
        let result: Result<i32> =
            prompt_until(&mut input, &mut output, "n: ", "again", |line| line.parse().ok());
        assert!(matches!(result, Err(JokerError::InputClosed)));
    }
}
