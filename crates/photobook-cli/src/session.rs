use anyhow::{Context, Result, anyhow};
use photobook_core::{Direction, Engine, ModeSource, Side, Spread, ViewportMode};

/// One line of input in a `read` session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Navigate(Direction),
    Click(Side),
    Jump(String),
    /// 1-based position in the bookmark list
    Bookmark(usize),
    Width(f32),
    Quit,
}

/// Parse a session line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "n" | "next" => SessionCommand::Navigate(Direction::Forward),
        "p" | "prev" => SessionCommand::Navigate(Direction::Backward),
        "l" | "left" => SessionCommand::Click(Side::Left),
        "r" | "right" => SessionCommand::Click(Side::Right),
        // Anything goes here, the engine decides what it means
        "g" | "go" => SessionCommand::Jump(rest.to_string()),
        "b" | "bookmark" => {
            let position: usize = rest
                .parse()
                .with_context(|| format!("Invalid bookmark number: {rest:?}"))?;
            if position == 0 {
                return Err(anyhow!("Bookmarks are numbered from 1"));
            }
            SessionCommand::Bookmark(position)
        }
        "w" | "width" => {
            let width: f32 = rest
                .parse()
                .with_context(|| format!("Invalid width: {rest:?}"))?;
            SessionCommand::Width(width)
        }
        "q" | "quit" | "exit" => SessionCommand::Quit,
        other => return Err(anyhow!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

/// Apply a command; returns false once the session should end
pub fn apply<M: ModeSource>(
    command: SessionCommand,
    engine: &mut Engine<M>,
    viewport: &ViewportMode,
) -> Result<bool> {
    match command {
        SessionCommand::Navigate(direction) => {
            engine.navigate(direction);
        }
        SessionCommand::Click(side) => {
            engine.click_zone(side);
        }
        SessionCommand::Jump(text) => {
            engine.jump_to(text);
        }
        SessionCommand::Bookmark(position) => {
            if engine.jump_to_bookmark_at(position - 1).is_none() {
                return Err(anyhow!(
                    "No bookmark {position} (book has {})",
                    engine.bookmarks().len()
                ));
            }
        }
        SessionCommand::Width(width) => {
            viewport.set_width(width);
        }
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Multi-line description of what the reader currently sees
pub fn render_view<M: ModeSource>(engine: &Engine<M>) -> String {
    let view = engine.view();
    let mut out = format!(
        "Page {} / {}  [{:?}, {:?}]\n",
        view.display_page_number, view.total_pages, view.state.mode, view.boundary
    );

    match view.spread {
        Spread::Pair { left, right } => {
            let slot = |page: Option<&photobook_core::PageRef>| {
                page.map_or_else(|| "(blank)".to_string(), ToString::to_string)
            };
            out.push_str(&format!("  left:  {}\n", slot(left)));
            out.push_str(&format!("  right: {}\n", slot(right)));
        }
        Spread::Single(page) => {
            out.push_str(&format!("  page:  {page}\n"));
        }
    }

    let labels: Vec<&str> = view
        .active_bookmarks
        .iter()
        .filter_map(|&position| engine.bookmarks().get(position))
        .map(|bookmark| bookmark.label())
        .collect();
    if !labels.is_empty() {
        out.push_str(&format!("  bookmarks: {}\n", labels.join(", ")));
    }
    out
}
