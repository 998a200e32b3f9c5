//! Command module
//!
//! Built-in commands and the prefix matching that turns player input into an action.
//! Input is compared against the exits of the current location and the built-in
//! command names; a token selects a candidate when it is a prefix of its name, so
//! `n` reaches `north` as long as nothing else available starts with `n`.

use std::collections::BTreeMap;
use std::fmt;

use variantly::Variantly;

use crate::{DirectionId, PlayerCharacter, ReplControl, View};

/// Behaviour bound to a built-in command.
pub type CommandFn = fn(&PlayerCharacter, &mut View) -> ReplControl;

/// A named action available regardless of the player's location.
#[derive(Clone)]
pub struct Command {
    name: String,
    action: CommandFn,
}

impl Command {
    pub fn new(name: impl Into<String>, action: CommandFn) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self, character: &PlayerCharacter, view: &mut View) -> ReplControl {
        (self.action)(character, view)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Outcome of matching one line of input against the available candidates.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Resolution {
    /// Nothing but whitespace was entered.
    Empty,
    /// No candidate starts with the input.
    Unknown,
    /// Exactly one exit direction matched.
    #[variantly(rename = "travel")]
    Move(DirectionId),
    /// Exactly one built-in command matched.
    Command(String),
    /// Several candidates matched; holds their names in sorted order.
    Ambiguous(Vec<String>),
}

/// Resolve `input` against exit directions and built-in command names.
///
/// Input is trimmed but not case-folded. A direction reachable through several
/// exits counts as a single candidate.
pub fn resolve_input<'a>(
    input: &str,
    exits: impl IntoIterator<Item = (DirectionId, &'a str)>,
    commands: impl IntoIterator<Item = &'a str>,
) -> Resolution {
    let token = input.trim();
    if token.is_empty() {
        return Resolution::Empty;
    }

    let mut moves = BTreeMap::new();
    for (direction, name) in exits {
        if name.starts_with(token) {
            moves.entry(name).or_insert(direction);
        }
    }
    let builtins: Vec<&str> = commands.into_iter().filter(|name| name.starts_with(token)).collect();

    match (moves.len(), builtins.as_slice()) {
        (0, []) => Resolution::Unknown,
        (1, []) => moves
            .into_values()
            .next()
            .map_or(Resolution::Unknown, Resolution::Move),
        (0, [name]) => Resolution::Command((*name).to_string()),
        _ => {
            let mut names: Vec<String> = moves
                .into_keys()
                .chain(builtins.iter().copied())
                .map(str::to_string)
                .collect();
            names.sort_unstable();
            names.dedup();
            Resolution::Ambiguous(names)
        },
    }
}
