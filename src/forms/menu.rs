use crate::domain::types::TypeConstraintError;

/// Entries of the main menu, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowOccupancy,
    Park,
    Unpark,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [Self::ShowOccupancy, Self::Park, Self::Unpark, Self::Exit];

    pub const fn number(self) -> i32 {
        match self {
            Self::ShowOccupancy => 1,
            Self::Park => 2,
            Self::Unpark => 3,
            Self::Exit => 4,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::ShowOccupancy => "Display Parking Lot Occupancy Details",
            Self::Park => "Park a Vehicle",
            Self::Unpark => "Unpark a Vehicle",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<i32> for MenuChoice {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("menu choice: {value}")))
    }
}
