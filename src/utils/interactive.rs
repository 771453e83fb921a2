use crate::utils::error::{AppError, AppResult};
use crossterm::{
    cursor,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, Read, Write};

fn terminal_error(e: io::Error) -> AppError {
    AppError::System(format!("Terminal error: {}", e))
}

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(terminal_error)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(terminal_error)?;

    Ok(input.trim().to_string())
}

/// Read feedback in raw mode: Enter submits, Ctrl+J or Shift+Enter starts a new line.
///
/// Returns `Ok(None)` when the user presses Esc.
pub fn prompt_multiline(prompt: &str) -> AppResult<Option<String>> {
    println!("{}", prompt);

    terminal::enable_raw_mode().map_err(terminal_error)?;
    let _ = execute!(io::stdout(), EnableBracketedPaste);

    let result = read_lines();

    let _ = execute!(io::stdout(), DisableBracketedPaste);
    let _ = terminal::disable_raw_mode();

    println!();
    result.map_err(terminal_error)
}

fn read_lines() -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    loop {
        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('j'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::SHIFT,
                ..
            }) => {
                lines.push(std::mem::take(&mut current_line));
                print!("\r\n");
                stdout.flush()?;
            }
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }) => {
                lines.push(current_line);
                return Ok(Some(lines.join("\n")));
            }
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Esc, ..
            }) => return Ok(None),
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                ..
            }) => {
                current_line.push(c);
                print!("{}", c);
                stdout.flush()?;
            }
            Event::Key(KeyEvent {
                code: KeyCode::Backspace,
                ..
            }) => {
                if current_line.pop().is_some() {
                    execute!(stdout, cursor::MoveLeft(1), terminal::Clear(ClearType::UntilNewLine))?;
                } else if let Some(previous) = lines.pop() {
                    current_line = previous;
                    execute!(
                        stdout,
                        cursor::MoveUp(1),
                        cursor::MoveToColumn(0),
                        terminal::Clear(ClearType::UntilNewLine)
                    )?;
                    print!("{}", current_line);
                }
                stdout.flush()?;
            }
            Event::Paste(pasted_text) => {
                let mut pasted_lines = pasted_text.lines().peekable();
                while let Some(line) = pasted_lines.next() {
                    current_line.push_str(line);
                    if pasted_lines.peek().is_some() {
                        lines.push(std::mem::take(&mut current_line));
                        print!("{}\r\n", line);
                    } else {
                        print!("{}", line);
                    }
                }
                stdout.flush()?;
            }
            _ => {}
        }
    }
}

/// Read everything piped into stdin
pub fn read_piped_stdin() -> AppResult<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| AppError::Io(format!("stdin: {}", e)))?;
    Ok(input)
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}
