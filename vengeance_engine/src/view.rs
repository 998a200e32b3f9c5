//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we'll aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::style::{GameStyle, indented_block, normal_block};

const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_ENGINE: &str = "⚙";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Items queued since the last flush, in the order they were pushed.
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    /// Compose the queued items into output lines, environment first and system messages last.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in [Section::Environment, Section::DirectResult, Section::System] {
            for item in self.items.iter().filter(|item| item.section() == section) {
                lines.extend(self.render_item(item));
            }
        }
        lines
    }

    fn render_item(&self, item: &ViewItem) -> Vec<String> {
        match item {
            ViewItem::RoomDescription { name, description } => {
                let mut lines = vec![format!("{:^width$}", name.room_titlebar_style(), width = self.width)];
                if !description.is_empty() {
                    lines.push(fill(description, normal_block()).description_style().to_string());
                }
                lines
            },
            ViewItem::UnknownCommand(input) => vec![error_line(&format!("I don't understand \"{input}\"."))],
            ViewItem::AmbiguousCommand { input, matches } => {
                let choices: Vec<String> = matches.iter().map(|m| m.exit_style().to_string()).collect();
                vec![
                    error_line(&format!("\"{input}\" could mean more than one thing:")),
                    fill(&choices.join(", "), indented_block()),
                ]
            },
            ViewItem::Error(msg) => vec![error_line(msg)],
            ViewItem::EngineMessage(msg) => {
                vec![fill(&format!("{ICON_ENGINE:<4}{msg}"), normal_block()).engine_style().to_string()]
            },
            ViewItem::Farewell(msg) => vec![fill(msg, normal_block()).description_style().to_string()],
        }
    }

    /// Display everything queued this turn and clear the buffer.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for line in self.render() {
            println!("{line}");
        }
        self.items.clear();
    }
}

fn error_line(msg: &str) -> String {
    fill(&format!("{:<4}{}", ICON_ERROR.error_style(), msg), normal_block())
}

/// Where an item appears in the turn's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Environment,
    DirectResult,
    System,
}

/// Something to show the player at the end of the turn.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    AmbiguousCommand { input: String, matches: Vec<String> },
    EngineMessage(String),
    Error(String),
    Farewell(String),
    RoomDescription { name: String, description: String },
    UnknownCommand(String),
}

impl ViewItem {
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } => Section::Environment,
            ViewItem::AmbiguousCommand { .. } | ViewItem::UnknownCommand(_) | ViewItem::Error(_) => {
                Section::DirectResult
            },
            ViewItem::EngineMessage(_) | ViewItem::Farewell(_) => Section::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_orders_by_section() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.width = 40;
        view.push(ViewItem::Farewell("Bye".into()));
        view.push(ViewItem::UnknownCommand("xyzzy".into()));
        view.push(ViewItem::RoomDescription {
            name: "A Cave".into(),
            description: "A dark and dingy place".into(),
        });

        let lines = view.render();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].trim(), "A Cave");
        assert_eq!(lines[1], "A dark and dingy place");
        assert!(lines[2].ends_with("I don't understand \"xyzzy\"."));
        assert_eq!(lines[3], "Bye");
    }

    #[test]
    fn flush_clears_items() {
        let mut view = View::new();
        view.push(ViewItem::EngineMessage("hello".into()));
        view.flush();
        assert!(view.items().is_empty());
    }

    #[test]
    fn sections() {
        assert_eq!(ViewItem::Error(String::new()).section(), Section::DirectResult);
        assert_eq!(ViewItem::Farewell(String::new()).section(), Section::System);
    }
}
