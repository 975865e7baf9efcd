//! Search bar input. Each stdin line becomes one or more input events.
//!
//! - `Jakarta`          type "Jakarta" and press Enter
//! - `:type Jakarta`    edit the input without submitting
//! - `:search`          click the Search button
//! - `:quit`            leave

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Replace the input text
    Edit(String),
    /// Enter key in the input
    Enter,
    /// Search button click
    ButtonClick,
    Quit,
}

pub fn parse_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(command) = line.strip_prefix(':') {
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));
        match name {
            "type" => return vec![InputEvent::Edit(rest.to_string())],
            "search" => return vec![InputEvent::ButtonClick],
            "quit" | "q" => return vec![InputEvent::Quit],
            // Anything else is a place name that happens to start with ':'
            _ => {}
        }
    }

    vec![InputEvent::Edit(line.to_string()), InputEvent::Enter]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_types_and_presses_enter() {
        assert_eq!(
            parse_line("Jakarta"),
            vec![InputEvent::Edit("Jakarta".into()), InputEvent::Enter]
        );
    }

    #[test]
    fn plain_line_keeps_inner_whitespace() {
        assert_eq!(
            parse_line("New York\r\n"),
            vec![InputEvent::Edit("New York".into()), InputEvent::Enter]
        );
    }

    #[test]
    fn type_command_only_edits() {
        assert_eq!(
            parse_line(":type San Francisco"),
            vec![InputEvent::Edit("San Francisco".into())]
        );
        assert_eq!(parse_line(":type"), vec![InputEvent::Edit(String::new())]);
    }

    #[test]
    fn search_command_clicks_button() {
        assert_eq!(parse_line(":search"), vec![InputEvent::ButtonClick]);
    }

    #[test]
    fn quit_commands() {
        assert_eq!(parse_line(":quit"), vec![InputEvent::Quit]);
        assert_eq!(parse_line(":q"), vec![InputEvent::Quit]);
    }

    #[test]
    fn unknown_command_is_a_place_name() {
        assert_eq!(
            parse_line(":nowhere"),
            vec![InputEvent::Edit(":nowhere".into()), InputEvent::Enter]
        );
    }
}
