#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Correct,
    Skip,
    Quit,
}

pub const HELP: &str = "Commands: [c]orrect, [s]kip, [q]uit";

pub fn parse(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "c" | "correct" | "got it" => Some(Command::Correct),
        "s" | "skip" => Some(Command::Skip),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
