use crate::config::NUM_BUTTONS;

/// Logical function of a button line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Fine,
    FlipX,
    FlipY,
    Up,
    Down,
    Left,
    Right,
    FocusMinus,
    FocusPlus,
}

/// One of the three latched mode flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Fine,
    FlipX,
    FlipY,
}

/// Physical wiring: slot index -> role.
pub const ROLE_MAP: [Role; NUM_BUTTONS] = [
    Role::Fine,
    Role::FlipX,
    Role::FlipY,
    Role::Up,
    Role::Down,
    Role::Left,
    Role::Right,
    Role::FocusMinus,
    Role::FocusPlus,
];

impl Role {
    /// The mode flag this button latches, `None` for movement and focus.
    pub fn toggle(self) -> Option<Toggle> {
        match self {
            Role::Fine => Some(Toggle::Fine),
            Role::FlipX => Some(Toggle::FlipX),
            Role::FlipY => Some(Toggle::FlipY),
            _ => None,
        }
    }

    pub fn is_toggle(self) -> bool {
        self.toggle().is_some()
    }
}

/// Latched mode flags, all off at power-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggles {
    pub fine: bool,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Toggles {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Fine => self.fine,
            Toggle::FlipX => self.flip_x,
            Toggle::FlipY => self.flip_y,
        }
    }

    /// Invert `toggle` and return its new state.
    pub fn flip(&mut self, toggle: Toggle) -> bool {
        let flag = match toggle {
            Toggle::Fine => &mut self.fine,
            Toggle::FlipX => &mut self.flip_x,
            Toggle::FlipY => &mut self.flip_y,
        };
        *flag = !*flag;
        *flag
    }
}
