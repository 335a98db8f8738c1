//! Channel write patterns for the movement and focus buttons

use super::role::{Role, Toggles};
use crate::config::{
    FOCUS_CHANNEL, FOCUS_MINUS_VALUE, FOCUS_PLUS_VALUE, HIGH_SPEED, LOW_SPEED,
    PAN_DIRECTION_CHANNEL, PAN_SPEED_CHANNEL, TILT_DIRECTION_CHANNEL, TILT_SPEED_CHANNEL,
};
use crate::dmx::DmxOutput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelCommand {
    /// Direction channel first, then the axis speed channel
    Axis {
        direction: (u16, u8),
        speed: (u16, u8),
    },
    Single(u16, u8),
}

impl ChannelCommand {
    /// Pattern for `role` given the toggles at the moment of the press.
    /// Toggle roles have no pattern.
    pub fn for_role(role: Role, toggles: &Toggles) -> Option<Self> {
        let speed = if toggles.fine { LOW_SPEED } else { HIGH_SPEED };

        let command = match role {
            Role::Fine | Role::FlipX | Role::FlipY => return None,
            Role::Up => Self::Axis {
                direction: (TILT_DIRECTION_CHANNEL, if toggles.flip_y { 0 } else { 255 }),
                speed: (TILT_SPEED_CHANNEL, speed),
            },
            Role::Down => Self::Axis {
                direction: (TILT_DIRECTION_CHANNEL, if toggles.flip_y { 255 } else { 0 }),
                speed: (TILT_SPEED_CHANNEL, speed),
            },
            Role::Left => Self::Axis {
                direction: (PAN_DIRECTION_CHANNEL, if toggles.flip_x { 0 } else { 255 }),
                speed: (PAN_SPEED_CHANNEL, speed),
            },
            Role::Right => Self::Axis {
                direction: (PAN_DIRECTION_CHANNEL, if toggles.flip_x { 255 } else { 0 }),
                speed: (PAN_SPEED_CHANNEL, speed),
            },
            Role::FocusMinus => Self::Single(FOCUS_CHANNEL, FOCUS_MINUS_VALUE),
            Role::FocusPlus => Self::Single(FOCUS_CHANNEL, FOCUS_PLUS_VALUE),
        };

        Some(command)
    }

    pub fn send<D: DmxOutput>(&self, dmx: &mut D) {
        match *self {
            Self::Axis { direction, speed } => {
                dmx.write(direction.0, direction.1);
                dmx.write(speed.0, speed.1);
            }
            Self::Single(channel, value) => dmx.write(channel, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggles(fine: bool, flip_x: bool, flip_y: bool) -> Toggles {
        Toggles {
            fine,
            flip_x,
            flip_y,
        }
    }

    fn axis(role: Role, t: Toggles) -> ((u16, u8), (u16, u8)) {
        match ChannelCommand::for_role(role, &t) {
            Some(ChannelCommand::Axis { direction, speed }) => (direction, speed),
            other => panic!("expected axis command for {:?}, got {:?}", role, other),
        }
    }

    #[test]
    fn toggle_roles_have_no_pattern() {
        let t = toggles(true, true, true);
        assert_eq!(ChannelCommand::for_role(Role::Fine, &t), None);
        assert_eq!(ChannelCommand::for_role(Role::FlipX, &t), None);
        assert_eq!(ChannelCommand::for_role(Role::FlipY, &t), None);
    }

    #[test]
    fn tilt_follows_flip_y_and_fine() {
        assert_eq!(axis(Role::Up, toggles(false, false, false)), ((3, 255), (6, 255)));
        assert_eq!(axis(Role::Up, toggles(false, false, true)), ((3, 0), (6, 255)));
        assert_eq!(axis(Role::Down, toggles(false, false, false)), ((3, 0), (6, 255)));
        assert_eq!(axis(Role::Down, toggles(true, false, true)), ((3, 255), (6, 127)));
        // flip_x does not touch tilt
        assert_eq!(axis(Role::Up, toggles(false, true, false)), ((3, 255), (6, 255)));
    }

    #[test]
    fn pan_follows_flip_x_and_fine() {
        assert_eq!(axis(Role::Left, toggles(false, false, false)), ((1, 255), (5, 255)));
        assert_eq!(axis(Role::Left, toggles(true, false, false)), ((1, 255), (5, 127)));
        assert_eq!(axis(Role::Right, toggles(false, false, false)), ((1, 0), (5, 255)));
        assert_eq!(axis(Role::Right, toggles(false, true, false)), ((1, 255), (5, 255)));
        assert_eq!(axis(Role::Left, toggles(false, false, true)), ((1, 255), (5, 255)));
    }

    #[test]
    fn focus_ignores_toggles() {
        for t in [toggles(false, false, false), toggles(true, true, true)] {
            assert_eq!(
                ChannelCommand::for_role(Role::FocusMinus, &t),
                Some(ChannelCommand::Single(501, 128))
            );
            assert_eq!(
                ChannelCommand::for_role(Role::FocusPlus, &t),
                Some(ChannelCommand::Single(501, 255))
            );
        }
    }
}
