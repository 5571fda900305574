/// Commands accepted by the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(String),
    Clear,
    Refresh,
    Retry,
    List,
    Categories,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
Commands:
  toggle <id>   select or deselect a category
  clear         remove all category filters
  refresh       fetch the catalog again
  retry         retry after an error
  list          show the filtered items
  categories    show categories and the current selection
  help          show this message
  quit          exit";
}

/// Parses one input line. Keywords are case-insensitive; category ids are not.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_ascii_lowercase();
    let argument = parts.next();

    if parts.next().is_some() {
        return None;
    }

    match (keyword.as_str(), argument) {
        ("toggle" | "t", Some(id)) => Some(Command::Toggle(id.to_string())),
        ("clear", None) => Some(Command::Clear),
        ("refresh" | "r", None) => Some(Command::Refresh),
        ("retry", None) => Some(Command::Retry),
        ("list" | "ls", None) => Some(Command::List),
        ("categories" | "cats", None) => Some(Command::Categories),
        ("help" | "?", None) => Some(Command::Help),
        ("quit" | "q" | "exit", None) => Some(Command::Quit),
        _ => None,
    }
}
