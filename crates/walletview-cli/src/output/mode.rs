use crate::cli::{Commands, DemoCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Statement { json, .. } | Commands::Offers { json, .. } => {
            OutputMode::from_flag(*json)
        }
        Commands::Demo { command } => match command {
            DemoCommand::Statement { json, .. } | DemoCommand::Offers { json, .. } => {
                OutputMode::from_flag(*json)
            }
        },
    }
}
