/// ----- COMMAND MODULE -----
/// Turns operator input into commands and validates every floor number
/// before it can reach the elevator.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utilities::config::{MAX_FLOORS, MIN_FLOORS};
use crate::utilities::error::InputError;
use crate::utilities::request::Request;

lazy_static! {
    static ref FLOOR_COMMAND: Regex = Regex::new(r"^(U:|D:)?(\d+)$").unwrap();
}

pub const HELP_TEXT: &str = "\
Valid commands: 'start', 'exit', 'help', 'status' or enter a floor number
To simulate a floor button inside simply enter the floor number.
To simulate a floor button outside the elevator enter either U: or D: and then the floor number like 'U:10' or 'D:5'
To pause execution and add more commands, just hit the 'Enter' key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Start,
    Exit,
    Help,
    Status,
    Floor(Request),
}

pub fn validate_floor_count(num_floors: u8) -> Result<u8, InputError> {
    if (MIN_FLOORS..=MAX_FLOORS).contains(&num_floors) {
        Ok(num_floors)
    } else {
        Err(InputError::InvalidFloorCount { min: MIN_FLOORS, max: MAX_FLOORS })
    }
}

pub fn parse_floor_count(input: &str) -> Result<u8, InputError> {
    input
        .trim()
        .parse::<u8>()
        .map_err(|_| InputError::InvalidFloorCount { min: MIN_FLOORS, max: MAX_FLOORS })
        .and_then(validate_floor_count)
}

pub fn validate_starting_floor(floor: u8, num_floors: u8) -> Result<u8, InputError> {
    if (1..=num_floors).contains(&floor) {
        Ok(floor)
    } else {
        Err(InputError::InvalidStartingFloor { max: num_floors })
    }
}

pub fn parse_starting_floor(input: &str, num_floors: u8) -> Result<u8, InputError> {
    input
        .trim()
        .parse::<u8>()
        .map_err(|_| InputError::InvalidStartingFloor { max: num_floors })
        .and_then(|floor| validate_starting_floor(floor, num_floors))
}

/// Parses one line from the operator. Keywords and the `U:`/`D:` prefixes
/// are case insensitive.
pub fn parse(line: &str, num_floors: u8) -> Result<Command, InputError> {
    let command = line.trim().to_uppercase();
    match command.as_str() {
        "" => return Ok(Command::Pause),
        "START" => return Ok(Command::Start),
        "EXIT" => return Ok(Command::Exit),
        "HELP" => return Ok(Command::Help),
        "STATUS" => return Ok(Command::Status),
        _ => (),
    }

    let captures = FLOOR_COMMAND
        .captures(&command)
        .ok_or_else(|| InputError::InvalidCommandSyntax(line.trim().to_string()))?;
    let digits = &captures[2];
    let floor = digits
        .parse::<u8>()
        .ok()
        .filter(|floor| (1..=num_floors).contains(floor))
        .ok_or_else(|| InputError::FloorOutOfRange { floor: digits.to_string(), max: num_floors })?;

    let request = match captures.get(1).map(|prefix| prefix.as_str()) {
        Some("U:") => Request::up(floor),
        Some("D:") => Request::down(floor),
        _ => Request::inside(floor),
    };
    Ok(Command::Floor(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_ignore_case_and_whitespace() {
        assert_eq!(parse("", 10), Ok(Command::Pause));
        assert_eq!(parse("   ", 10), Ok(Command::Pause));
        assert_eq!(parse("Start", 10), Ok(Command::Start));
        assert_eq!(parse(" exit ", 10), Ok(Command::Exit));
        assert_eq!(parse("HELP", 10), Ok(Command::Help));
        assert_eq!(parse("status", 10), Ok(Command::Status));
    }

    #[test]
    fn floor_commands_map_to_requests() {
        assert_eq!(parse("7", 10), Ok(Command::Floor(Request::inside(7))));
        assert_eq!(parse("U:10", 10), Ok(Command::Floor(Request::up(10))));
        assert_eq!(parse("d:1", 10), Ok(Command::Floor(Request::down(1))));
        assert_eq!(parse("007", 10), Ok(Command::Floor(Request::inside(7))));
    }

    #[test]
    fn malformed_commands_are_rejected() {
        for line in ["U:", "X:3", "U3", "3 4", "-2", "up", "U:D:3"] {
            assert!(
                matches!(parse(line, 10), Err(InputError::InvalidCommandSyntax(_))),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn floors_outside_the_building_are_rejected() {
        for line in ["0", "11", "U:0", "D:12", "99999999999999999999"] {
            assert!(
                matches!(parse(line, 10), Err(InputError::FloorOutOfRange { max: 10, .. })),
                "{:?} should be out of range",
                line
            );
        }
    }

    #[test]
    fn floor_count_must_be_within_bounds() {
        assert_eq!(parse_floor_count("2"), Ok(2));
        assert_eq!(parse_floor_count(" 100 "), Ok(100));
        for input in ["1", "101", "300", "ten", ""] {
            assert_eq!(
                parse_floor_count(input),
                Err(InputError::InvalidFloorCount { min: 2, max: 100 })
            );
        }
    }

    #[test]
    fn starting_floor_must_be_in_building() {
        assert_eq!(parse_starting_floor("1", 5), Ok(1));
        assert_eq!(parse_starting_floor("5", 5), Ok(5));
        for input in ["0", "6", "x"] {
            assert_eq!(
                parse_starting_floor(input, 5),
                Err(InputError::InvalidStartingFloor { max: 5 })
            );
        }
    }

    #[test]
    fn errors_render_operator_messages() {
        assert_eq!(
            parse("U:", 5).unwrap_err().to_string(),
            "Invalid Command"
        );
        assert_eq!(
            parse("9", 5).unwrap_err().to_string(),
            "Invalid floor number: out of range"
        );
    }
}
