//! Event script parsing.
//!
//! A script is one command per line, split with shell quoting rules.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! login "Local Player" 3094 3491 0
//! tick 10 3094 3491 0
//! hit-out Bob
//! anim Pker 7514 3095 3491 0 13652 "Dragon claws"
//! chat "Your PK skull will now last for 10 minutes."
//! ```

use thiserror::Error;

use skulltimer_core::{WeaponRef, WorldPoint};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: invalid quoting")]
    Quoting { line: usize },

    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Advance to `tick`, optionally moving the local player
    Tick {
        tick: u32,
        position: Option<WorldPoint>,
    },
    /// Local player hit `target`
    HitOut { target: String },
    /// Local player was hit
    HitIn,
    Anim {
        actor: String,
        animation: i32,
        position: WorldPoint,
        weapon: Option<WeaponRef>,
    },
    Interact {
        source: String,
        target: Option<String>,
    },
    Despawn { actor: String, logged_out: bool },
    Death { actor: String },
    /// Put `item` (or nothing) into equipment `slot`
    Equip { slot: usize, item: Option<i32> },
    Teleport,
    Chat { message: String },
    Login {
        name: String,
        position: Option<WorldPoint>,
    },
    Logout,
    Hop,
    /// Local player died
    Died,
}

/// Parse a single script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shlex::split(line).ok_or(ScriptError::Quoting { line: line_number })?;
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };
    let args = Args {
        line: line_number,
        words: args,
    };

    let parsed = match command.as_str() {
        "tick" => ScriptCommand::Tick {
            tick: args.number(0, "tick", "a tick number")?,
            position: args.optional_point(1)?,
        },
        "hit-out" => ScriptCommand::HitOut {
            target: args.word(0, "hit-out", "a target name")?,
        },
        "hit-in" => ScriptCommand::HitIn,
        "anim" => {
            const EXPECTED: &str = "an actor, an animation id and x y plane";
            ScriptCommand::Anim {
                actor: args.word(0, "anim", EXPECTED)?,
                animation: args.number(1, "anim", EXPECTED)?,
                position: args
                    .optional_point(2)?
                    .ok_or(args.missing("anim", EXPECTED))?,
                weapon: match args.words.get(5) {
                    Some(id) => Some(WeaponRef::new(
                        args.parse(id)?,
                        args.words.get(6).map(String::as_str).unwrap_or_default(),
                    )),
                    None => None,
                },
            }
        }
        "interact" => ScriptCommand::Interact {
            source: args.word(0, "interact", "a source name")?,
            target: args.words.get(1).cloned(),
        },
        "despawn" => ScriptCommand::Despawn {
            actor: args.word(0, "despawn", "an actor name")?,
            logged_out: args.words.get(1).is_some_and(|w| w == "logout"),
        },
        "death" => ScriptCommand::Death {
            actor: args.word(0, "death", "an actor name")?,
        },
        "equip" => {
            const EXPECTED: &str = "a slot and an item id or `none`";
            let item = args.word(1, "equip", EXPECTED)?;
            ScriptCommand::Equip {
                slot: args.number(0, "equip", EXPECTED)?,
                item: match item.as_str() {
                    "none" => None,
                    id => Some(args.parse(id)?),
                },
            }
        }
        "teleport" => ScriptCommand::Teleport,
        "chat" => ScriptCommand::Chat {
            message: args.words.join(" "),
        },
        "login" => ScriptCommand::Login {
            name: args.word(0, "login", "a player name")?,
            position: args.optional_point(1)?,
        },
        "logout" => ScriptCommand::Logout,
        "hop" => ScriptCommand::Hop,
        "died" => ScriptCommand::Died,
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_number,
                command: other.to_string(),
            });
        }
    };

    Ok(Some(parsed))
}

/// Arguments following the command word
struct Args<'a> {
    line: usize,
    words: &'a [String],
}

impl Args<'_> {
    fn missing(&self, command: &'static str, expected: &'static str) -> ScriptError {
        ScriptError::MissingArgument {
            line: self.line,
            command,
            expected,
        }
    }

    fn word(
        &self,
        index: usize,
        command: &'static str,
        expected: &'static str,
    ) -> Result<String, ScriptError> {
        self.words
            .get(index)
            .cloned()
            .ok_or_else(|| self.missing(command, expected))
    }

    fn parse<T: std::str::FromStr>(&self, value: &str) -> Result<T, ScriptError> {
        value.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            value: value.to_string(),
        })
    }

    fn number<T: std::str::FromStr>(
        &self,
        index: usize,
        command: &'static str,
        expected: &'static str,
    ) -> Result<T, ScriptError> {
        let word = self.word(index, command, expected)?;
        self.parse(&word)
    }

    /// `x y plane` starting at `index`, if present
    fn optional_point(&self, index: usize) -> Result<Option<WorldPoint>, ScriptError> {
        match self.words.get(index..index + 3) {
            Some([x, y, plane]) => Ok(Some(WorldPoint::new(
                self.parse(x)?,
                self.parse(y)?,
                self.parse(plane)?,
            ))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests;
