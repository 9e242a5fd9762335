/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; re-prompt.
    Empty,
    Quit,
    Help,
    /// `units <value>`; the value is unvalidated and may be empty.
    Units(String),
    /// Anything else is a city name (already trimmed).
    Lookup(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Command::Quit,
            "help" => return Command::Help,
            _ => {}
        }

        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or_default();
        if head.eq_ignore_ascii_case("units") {
            let value = parts.next().unwrap_or_default().trim();
            return Command::Units(value.to_string());
        }

        Command::Lookup(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t "), Command::Empty);
    }

    #[test]
    fn quit_words_any_case() {
        for word in ["quit", "EXIT", "Q", "  Quit  "] {
            assert_eq!(Command::parse(word), Command::Quit, "{word:?}");
        }
    }

    #[test]
    fn help_any_case() {
        assert_eq!(Command::parse("HeLp"), Command::Help);
    }

    #[test]
    fn units_carries_trimmed_value() {
        let cases = [
            ("units imperial", "imperial"),
            ("UNITS   Kelvin  ", "Kelvin"),
            ("units", ""),
        ];

        for (line, value) in cases {
            assert_eq!(Command::parse(line), Command::Units(value.to_string()));
        }
    }

    #[test]
    fn everything_else_is_a_city() {
        let cases = [
            ("  New York ", "New York"),
            ("Quito", "Quito"),
            ("unitsville", "unitsville"),
        ];

        for (line, city) in cases {
            assert_eq!(Command::parse(line), Command::Lookup(city.to_string()));
        }
    }
}
