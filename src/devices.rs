use crate::definitions::keyboard;

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all from the pixels, the slice is row major and
    /// contains `display::RESOLUTION` entries.
    fn display(&mut self, pixels: &[u32]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// A snapshot of the current state of all the keys.
    fn get_keyboard(&self) -> [bool; keyboard::SIZE];
}

/// Will represent the internal keyboard.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Releases all the keys.
    pub fn reset(&mut self) {
        self.keys = [false; keyboard::SIZE];
    }

    pub fn toggle_key(&mut self, key: usize) {
        self.set_key(key, !self.is_pressed(key))
    }

    /// Only the lowest nibble of the key is used.
    pub fn set_key(&mut self, key: usize, to: bool) {
        debug_assert!(key < keyboard::SIZE);
        self.keys[key & 0xF] = to;
    }

    /// Overwrites all the keys at once.
    ///
    /// # Panics
    /// If `keys` does not contain exactly `keyboard::SIZE` entries.
    pub fn set_mult(&mut self, keys: &[bool]) {
        assert_eq!(
            keys.len(),
            self.keys.len(),
            "The keyboard has exactly {} keys.",
            keyboard::SIZE
        );
        self.keys.copy_from_slice(keys);
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }

    /// Only the lowest nibble of the key is used.
    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys[key & 0xF]
    }

    /// The lowest key that is currently pressed.
    pub fn first_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|pressed| *pressed)
    }
}
