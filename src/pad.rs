//! Gamepad surface: 8 button booleans and the joypad register (0xff00)
//! selector logic that exposes them to the CPU.

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,

    /// Cleared when the host writes a 0 to bit 4 of 0xff00 ("P14 selected",
    /// action buttons readable).
    select_action: bool,

    /// Cleared when the host writes a 0 to bit 5 of 0xff00 ("P15 selected",
    /// direction buttons readable).
    select_direction: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            select_action: true,
            select_direction: true,
        }
    }

    /// Produces the byte the CPU observes at 0xff00.
    ///
    /// Bit 4/5 of the result echo the selector bits last written; bits 0..3
    /// encode whichever button group is selected, 0 meaning pressed. When
    /// both groups are selected (or neither is), the low nibble reads as
    /// all ones, matching the real hardware's wired-AND behaviour.
    pub fn read(&self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                let action_nibble = if self.a { 0x00 } else { 0x01 }
                    | if self.b { 0x00 } else { 0x02 }
                    | if self.select { 0x00 } else { 0x04 }
                    | if self.start { 0x00 } else { 0x08 };
                let direction_nibble = if self.right { 0x00 } else { 0x01 }
                    | if self.left { 0x00 } else { 0x02 }
                    | if self.up { 0x00 } else { 0x04 }
                    | if self.down { 0x00 } else { 0x08 };

                let low_nibble = match (self.select_action, self.select_direction) {
                    (false, true) => action_nibble,
                    (true, false) => direction_nibble,
                    _ => 0x0f,
                };
                let high_nibble = match (self.select_action, self.select_direction) {
                    (false, true) => 0xe0,
                    (true, false) => 0xd0,
                    _ => 0xf0,
                };
                high_nibble | low_nibble
            }
            addr => panic!("Reading from unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                self.select_action = value & 0x10 != 0x00;
                self.select_direction = value & 0x20 != 0x00;
            }
            addr => panic!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn key_press(&mut self, key: PadKey) {
        self.set_key(key, true);
    }

    pub fn key_lift(&mut self, key: PadKey) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: PadKey, pressed: bool) {
        match key {
            PadKey::Up => self.up = pressed,
            PadKey::Down => self.down = pressed,
            PadKey::Left => self.left = pressed,
            PadKey::Right => self.right = pressed,
            PadKey::Start => self.start = pressed,
            PadKey::Select => self.select = pressed,
            PadKey::A => self.a = pressed,
            PadKey::B => self.b = pressed,
        }
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neither_selected_reads_all_ones_nibble() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x30);
        pad.key_press(PadKey::A);
        assert_eq!(pad.read(0xff00) & 0x0f, 0x0f);
        assert_eq!(pad.read(0xff00) & 0xf0, 0xf0);
    }

    #[test]
    fn test_action_selected_reflects_a_press() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x20); // bit4=0 (select action), bit5=1
        pad.key_press(PadKey::A);
        assert_eq!(pad.read(0xff00), 0xee);
    }

    #[test]
    fn test_direction_selected_reflects_down_press() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x10); // bit4=1, bit5=0 (select direction)
        pad.key_press(PadKey::Down);
        assert_eq!(pad.read(0xff00), 0xd7);
    }

    #[test]
    fn test_both_selected_reads_all_ones_regardless_of_presses() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x00);
        pad.key_press(PadKey::A);
        pad.key_press(PadKey::Down);
        assert_eq!(pad.read(0xff00) & 0x0f, 0x0f);
    }

    #[test]
    fn test_key_lift_clears_bit() {
        let mut pad = Pad::new();
        pad.write(0xff00, 0x20);
        pad.key_press(PadKey::A);
        pad.key_lift(PadKey::A);
        assert_eq!(pad.read(0xff00) & 0x01, 0x01);
    }
}
