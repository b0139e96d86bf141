//! Command parsing for player input.

/// A parsed player command.
///
/// Missing arguments are kept as `None` so the session can ask for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit.
    Go {
        /// The direction word, as typed.
        direction: Option<String>,
    },
    /// Look around, or at something specific.
    Look {
        /// Optional item to examine.
        target: Option<String>,
    },
    /// Pick up an item.
    Take {
        /// The item name.
        item: Option<String>,
    },
    /// Use an item, optionally on a target.
    Use {
        /// The item name.
        item: Option<String>,
        /// What to use it on.
        target: Option<String>,
    },
    /// List inventory.
    Inventory,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
    /// Blank input.
    Empty,
    /// Unrecognized verb.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const GO_VERBS: &[&str] = &["go", "move"];
const LOOK_VERBS: &[&str] = &["look", "examine", "l"];
const TAKE_VERBS: &[&str] = &["take", "get"];
const USE_VERBS: &[&str] = &["use"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const HELP_VERBS: &[&str] = &["help", "?"];
const QUIT_VERBS: &[&str] = &["quit", "exit"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Command::Empty;
    };
    let verb = first.to_lowercase();
    let rest = &words[1..];

    if GO_VERBS.contains(&verb.as_str()) {
        return Command::Go {
            direction: rest.first().map(|w| w.to_string()),
        };
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return parse_look(rest);
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return Command::Take { item: joined(rest) };
    }
    if USE_VERBS.contains(&verb.as_str()) {
        return parse_use(rest);
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn joined(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn parse_look(rest: &[&str]) -> Command {
    // Skip "at" if present
    let target_words = match rest.split_first() {
        Some((first, tail)) if first.eq_ignore_ascii_case("at") => tail,
        _ => rest,
    };

    Command::Look {
        target: joined(target_words),
    }
}

fn parse_use(rest: &[&str]) -> Command {
    // "on" splits item and target only with words on both sides of it
    let inner = rest.get(1..rest.len().saturating_sub(1)).unwrap_or_default();
    match inner.iter().position(|w| w.eq_ignore_ascii_case("on")) {
        Some(offset) => {
            let split_pos = offset + 1;
            Command::Use {
                item: joined(&rest[..split_pos]),
                target: joined(&rest[split_pos + 1..]),
            }
        }
        None => Command::Use {
            item: joined(rest),
            target: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn parse_go() {
        assert_eq!(
            parse_command("go north"),
            Command::Go {
                direction: some("north")
            }
        );
        assert_eq!(
            parse_command("MOVE East"),
            Command::Go {
                direction: some("East")
            }
        );
        assert_eq!(parse_command("go"), Command::Go { direction: None });
    }

    #[test]
    fn go_takes_one_word() {
        assert_eq!(
            parse_command("go west quickly"),
            Command::Go {
                direction: some("west")
            }
        );
    }

    #[test]
    fn parse_look() {
        assert_eq!(parse_command("look"), Command::Look { target: None });
        assert_eq!(parse_command("l"), Command::Look { target: None });
        assert_eq!(
            parse_command("examine scribbled note"),
            Command::Look {
                target: some("scribbled note")
            }
        );
        assert_eq!(
            parse_command("look at the rope"),
            Command::Look {
                target: some("the rope")
            }
        );
        assert_eq!(parse_command("look at"), Command::Look { target: None });
    }

    #[test]
    fn parse_take() {
        assert_eq!(
            parse_command("take rusty key"),
            Command::Take {
                item: some("rusty key")
            }
        );
        assert_eq!(
            parse_command("get   prism   lens"),
            Command::Take {
                item: some("prism lens")
            }
        );
        assert_eq!(parse_command("take"), Command::Take { item: None });
    }

    #[test]
    fn parse_use() {
        assert_eq!(
            parse_command("use prism lens"),
            Command::Use {
                item: some("prism lens"),
                target: None
            }
        );
        assert_eq!(
            parse_command("use rusty key on gate"),
            Command::Use {
                item: some("rusty key"),
                target: some("gate")
            }
        );
        assert_eq!(
            parse_command("use coiled rope on"),
            Command::Use {
                item: some("coiled rope on"),
                target: None
            }
        );
        assert_eq!(
            parse_command("use"),
            Command::Use {
                item: None,
                target: None
            }
        );
    }

    #[test]
    fn use_with_leading_on_is_an_item_name() {
        assert_eq!(
            parse_command("use on gate"),
            Command::Use {
                item: some("on gate"),
                target: None
            }
        );
    }

    #[test]
    fn use_with_trailing_on_is_an_item_name() {
        assert_eq!(
            parse_command("use rusty key on"),
            Command::Use {
                item: some("rusty key on"),
                target: None
            }
        );
        assert_eq!(
            parse_command("use key on on gate"),
            Command::Use {
                item: some("key"),
                target: some("on gate")
            }
        );
    }

    #[test]
    fn parse_simple_verbs() {
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("I"), Command::Inventory);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("Exit"), Command::Quit);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
        assert_eq!(
            parse_command("north"),
            Command::Unknown {
                input: "north".to_string()
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   \t "), Command::Empty);
    }
}
