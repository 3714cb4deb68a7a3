//! Key names → player commands.

use topshot_core::commands::{AimDirection, PlayerCommand};

/// What a line of input asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Command(PlayerCommand),
    /// Print the latest snapshot.
    Status,
    Quit,
}

/// Map a key name to an action. Unknown keys yield `None`.
pub fn parse_key(key: &str) -> Option<InputAction> {
    let action = match key.trim().to_ascii_lowercase().as_str() {
        "a" => InputAction::Command(PlayerCommand::RotateAim {
            direction: AimDirection::Clockwise,
        }),
        "c" => InputAction::Command(PlayerCommand::RotateAim {
            direction: AimDirection::CounterClockwise,
        }),
        "up" => InputAction::Command(PlayerCommand::IncreasePower),
        "down" => InputAction::Command(PlayerCommand::DecreasePower),
        "left" => InputAction::Command(PlayerCommand::NudgeLeft),
        "right" => InputAction::Command(PlayerCommand::NudgeRight),
        "space" | "fire" => InputAction::Command(PlayerCommand::Launch),
        "status" | "s" => InputAction::Status,
        "q" | "quit" | "esc" => InputAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            parse_key("a"),
            Some(InputAction::Command(PlayerCommand::RotateAim {
                direction: AimDirection::Clockwise
            }))
        );
        assert_eq!(
            parse_key(" SPACE \n"),
            Some(InputAction::Command(PlayerCommand::Launch))
        );
        assert_eq!(
            parse_key("up"),
            Some(InputAction::Command(PlayerCommand::IncreasePower))
        );
        assert_eq!(parse_key("esc"), Some(InputAction::Quit));
        assert_eq!(parse_key("status"), Some(InputAction::Status));
        assert_eq!(parse_key("x"), None);
    }
}
