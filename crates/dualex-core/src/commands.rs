//! Recognized command vocabulary.
//!
//! The converter cares about exactly seven G/M codes. Everything else
//! passes through the rewriter untouched, so classification is total:
//! an unmatched token is a normal `None`, never an error.

/// The seven G/M codes the converter rewrites.
///
/// Each variant carries its own duplication/splitting rule in the
/// rewriter; matching on this enum is exhaustive, so adding a command
/// forces every rule site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// M101 - extruder on, forward.
    ExtruderForward,
    /// M102 - extruder on, reverse.
    ExtruderReverse,
    /// M103 - extruder off.
    ExtruderOff,
    /// M104 - set extruder temperature.
    SetTemperature,
    /// M108 - set extruder maximum speed.
    SetSpeed,
    /// M6 - tool change.
    ToolChange,
    /// G1 - coordinated motion.
    Motion,
}

impl Command {
    /// Classify a line's first token against the fixed vocabulary.
    ///
    /// Comparison is exact, case-sensitive, and whole-token. A missing
    /// or unmatched token yields `None`.
    pub fn classify(token: Option<&str>) -> Option<Command> {
        match token? {
            "M101" => Some(Command::ExtruderForward),
            "M102" => Some(Command::ExtruderReverse),
            "M103" => Some(Command::ExtruderOff),
            "M104" => Some(Command::SetTemperature),
            "M108" => Some(Command::SetSpeed),
            "M6" => Some(Command::ToolChange),
            "G1" => Some(Command::Motion),
            _ => None,
        }
    }

    /// The literal G/M code token, as emitted on output lines.
    pub fn token(&self) -> &'static str {
        match self {
            Command::ExtruderForward => "M101",
            Command::ExtruderReverse => "M102",
            Command::ExtruderOff => "M103",
            Command::SetTemperature => "M104",
            Command::SetSpeed => "M108",
            Command::ToolChange => "M6",
            Command::Motion => "G1",
        }
    }
}
