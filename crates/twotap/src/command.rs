use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  set <field> <value>          change a setting (size, position, offset, color,
                               primary, secondary, hover, labels, animation,
                               icon, brand-colors, url)
  add                          append a placeholder link
  link <n> <field> <value>     change platform, url or label of link n
  remove <n>                   delete link n
  show                         list the current configuration
  preview                      print satellite placements
  export                       print the embeddable code
  copy                         copy the embeddable code to the clipboard
  sample                       pick the custom primary color from the screen
  help                         this text
  quit                         leave the session";

const SET_USAGE: &str = "set <field> <value>";
const LINK_USAGE: &str = "link <n> <platform|url|label> <value>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Add,
    Link { index: usize, field: String, value: String },
    Remove(usize),
    Show,
    Preview,
    Export,
    Copy,
    Sample,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("could not split command: {0}")]
    Tokenize(String),
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a link number")]
    BadIndex(String),
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::BadIndex(raw.to_string()))
}

/// Splits off the first whitespace-delimited word.
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    Some(match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    })
}

/// The rest of the line is taken as is, so `#112233` survives. Only a quoted
/// value goes through shell-style unquoting.
fn parse_value(raw: &str) -> Result<Option<String>, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.starts_with(['"', '\'']) {
        return Ok(Some(raw.to_string()));
    }
    let words = shell_words::split(raw).map_err(|e| CommandError::Tokenize(e.to_string()))?;
    Ok(Some(words.join(" ")))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (head, rest) = next_word(line).ok_or(CommandError::Empty)?;

        match head.to_ascii_lowercase().as_str() {
            "set" => {
                let (key, value) = next_word(rest).ok_or(CommandError::Usage(SET_USAGE))?;
                let value = parse_value(value)?.ok_or(CommandError::Usage(SET_USAGE))?;
                Ok(Self::Set {
                    key: key.to_string(),
                    value,
                })
            }
            "link" => {
                let (index, rest) = next_word(rest).ok_or(CommandError::Usage(LINK_USAGE))?;
                let (field, value) = next_word(rest).ok_or(CommandError::Usage(LINK_USAGE))?;
                let index = parse_index(index)?;
                let value = parse_value(value)?.ok_or(CommandError::Usage(LINK_USAGE))?;
                Ok(Self::Link {
                    index,
                    field: field.to_string(),
                    value,
                })
            }
            "remove" | "rm" => match next_word(rest) {
                Some((index, "")) => Ok(Self::Remove(parse_index(index)?)),
                _ => Err(CommandError::Usage("remove <n>")),
            },
            "help" | "?" => Ok(Self::Help),
            verb => {
                let command = match verb {
                    "add" => Self::Add,
                    "show" => Self::Show,
                    "preview" => Self::Preview,
                    "export" => Self::Export,
                    "copy" => Self::Copy,
                    "sample" | "pick" => Self::Sample,
                    "quit" | "exit" | "q" => Self::Quit,
                    _ => return Err(CommandError::Unknown(line.trim().to_string())),
                };
                if rest.is_empty() {
                    Ok(command)
                } else {
                    Err(CommandError::Unknown(line.trim().to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("add", Command::Add),
            ("REMOVE 2", Command::Remove(2)),
            (
                "set size lg",
                Command::Set {
                    key: "size".to_string(),
                    value: "lg".to_string(),
                },
            ),
            (
                "link 0 label \"My Insta\"",
                Command::Link {
                    index: 0,
                    field: "label".to_string(),
                    value: "My Insta".to_string(),
                },
            ),
            (
                "link 1 label Find me here",
                Command::Link {
                    index: 1,
                    field: "label".to_string(),
                    value: "Find me here".to_string(),
                },
            ),
            (
                "set primary #112233",
                Command::Set {
                    key: "primary".to_string(),
                    value: "#112233".to_string(),
                },
            ),
            (
                "link 2 url https://example.com/#contact",
                Command::Link {
                    index: 2,
                    field: "url".to_string(),
                    value: "https://example.com/#contact".to_string(),
                },
            ),
            ("pick", Command::Sample),
            ("q", Command::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>().unwrap(), expected, "{line}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "set size".parse::<Command>(),
            Err(CommandError::Usage("set <field> <value>"))
        );
        assert_eq!(
            "remove first".parse::<Command>(),
            Err(CommandError::BadIndex("first".to_string()))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            "link 0 label".parse::<Command>(),
            Err(CommandError::Usage(LINK_USAGE))
        );
        assert_eq!(
            "add 3".parse::<Command>(),
            Err(CommandError::Unknown("add 3".to_string()))
        );
        assert!(matches!(
            "set label \"unterminated".parse::<Command>(),
            Err(CommandError::Tokenize(_))
        ));
    }
}
