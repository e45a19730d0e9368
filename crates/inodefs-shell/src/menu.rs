//! Numbered menu choices.

use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};
use thiserror::Error;

/// One line of the main menu. The discriminant is the number typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(to_string = "Create File")]
    Create = 1,
    #[strum(to_string = "Write to File")]
    Write = 2,
    #[strum(to_string = "Read File")]
    Read = 3,
    #[strum(to_string = "Delete File")]
    Delete = 4,
    #[strum(to_string = "Copy File")]
    Copy = 5,
    #[strum(to_string = "Rename File")]
    Rename = 6,
    #[strum(to_string = "Change File Permissions")]
    ChangePermissions = 7,
    #[strum(to_string = "Show File Permissions")]
    ShowPermissions = 8,
    #[strum(to_string = "Exit")]
    Exit = 9,
    #[strum(to_string = "List Directory")]
    List = 10,
    #[strum(to_string = "Show File Info")]
    Info = 11,
}

/// Why a menu line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    #[error("Invalid choice. Please try again.")]
    Unknown,
}

impl MenuChoice {
    /// Parse a line typed at the menu prompt.
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let number: u32 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        u8::try_from(number)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(ChoiceError::Unknown)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Menu text, one numbered line per choice.
    pub fn render() -> String {
        let mut out = String::from("\nOptions:\n");
        for choice in Self::iter() {
            out.push_str(&format!("{}. {}\n", choice.number(), choice));
        }
        out
    }
}
