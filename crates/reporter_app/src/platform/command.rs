/// A line of user input, parsed but not yet resolved against the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reload,
    /// 1-based position in the displayed repository list.
    ToggleFavorite(usize),
    Help,
    Quit,
}

pub const HELP: &str = "commands: r|reload, f|fav <n>, h|help, q|quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(HELP.to_string());
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "r" | "reload" => Command::Reload,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "f" | "fav" => {
            let raw = parts
                .next()
                .ok_or_else(|| "usage: f <n>".to_string())?;
            let index: usize = raw
                .parse()
                .map_err(|_| format!("not a repository number: {raw}"))?;
            if index == 0 {
                return Err("repository numbers start at 1".to_string());
            }
            Command::ToggleFavorite(index)
        }
        other => return Err(format!("unknown command '{other}'; {HELP}")),
    };

    if parts.next().is_some() {
        return Err(format!("too many arguments; {HELP}"));
    }
    Ok(command)
}
