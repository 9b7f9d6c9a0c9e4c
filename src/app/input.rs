use crate::model::SearchMode;

/// A line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Plain text: set the query and submit (the Enter key)
    Search(String),
    Mode(SearchMode),
    /// Show details of result card `n`
    View(usize),
    /// Show details of favorite `n`
    Open(usize),
    /// Toggle result card `n`, or the selected meal when `None`
    Favorite(Option<usize>),
    Favorites,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Type a search term and press Enter to search.
  /mode <ingredient|meal|category>  change search mode
  /view <n>                         show details of result n
  /fav [n]                          favorite/unfavorite result n, or the selected meal
  /open <n>                         show details of favorite n
  /favs                             list favorites
  /help                             show this help
  /quit                             exit";

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Input::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("mode", Some(label)) => Input::Mode(SearchMode::from_label(label)),
        ("view" | "v", Some(n)) => position(n).map_or_else(|| invalid(line), Input::View),
        ("open" | "o", Some(n)) => position(n).map_or_else(|| invalid(line), Input::Open),
        ("fav" | "f", None) => Input::Favorite(None),
        ("fav" | "f", Some(n)) => position(n)
            .map_or_else(|| invalid(line), |n| Input::Favorite(Some(n))),
        ("favs", None) => Input::Favorites,
        ("help" | "h" | "?", None) => Input::Help,
        ("quit" | "q" | "exit", None) => Input::Quit,
        _ => invalid(line),
    }
}

fn position(arg: &str) -> Option<usize> {
    arg.parse().ok().filter(|n| *n > 0)
}

fn invalid(line: &str) -> Input {
    Input::Invalid(line.to_string())
}
