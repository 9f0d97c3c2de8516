use crate::{
    chip8::ChipSet,
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    ProcessError,
};

/// Connects a chipset to the host devices.
///
/// The keyboard is polled before every cycle and the display gets the full
/// frame after every cycle that drew. Pacing the cycles is left to the host,
/// see [`INTERVAL`](crate::definitions::cpu::INTERVAL).
pub struct Runner<D, K>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    chip: ChipSet,
    display: D,
    keyboard: K,
}

impl<D, K> Runner<D, K>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    pub fn new(chip: ChipSet, display: D, keyboard: K) -> Self {
        Self {
            chip,
            display,
            keyboard,
        }
    }

    /// Runs a single cycle of the chipset.
    pub fn tick(&mut self) -> Result<Operation, ProcessError> {
        let keys = self.keyboard.get_keyboard();
        self.chip.set_keyboard(&keys);

        let operation = self.chip.cycle()?;

        if matches!(operation, Operation::Draw) {
            /* draw the screen */
            self.display.display(self.chip.get_display());
        }
        Ok(operation)
    }

    /// Runs the given amount of cycles, stops at the first error.
    pub fn run(&mut self, cycles: usize) -> Result<(), ProcessError> {
        for _ in 0..cycles {
            self.tick()?;
        }
        Ok(())
    }

    pub fn chip(&self) -> &ChipSet {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut ChipSet {
        &mut self.chip
    }

    /// Hands back the chipset and the devices.
    pub fn into_inner(self) -> (ChipSet, D, K) {
        (self.chip, self.display, self.keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ChipConfig,
        definitions::{display, keyboard},
        devices::{MockDisplayCommands, MockKeyboardCommands},
        resources::Rom,
    };

    fn chip_with(program: &[u16]) -> ChipSet {
        let data: Vec<u8> = program
            .iter()
            .flat_map(|opcode| opcode.to_be_bytes().to_vec())
            .collect();
        ChipSet::with_rom(Rom::new("runner", data), ChipConfig::default()).unwrap()
    }

    #[test]
    fn test_display_pushed_after_draw() {
        // V0 = 0, I = font glyph 0, draw it at (0, 0)
        let chip = chip_with(&[0x6000, 0xF029, 0xD005]);

        let mut display = MockDisplayCommands::new();
        display
            .expect_display()
            .withf(|pixels| {
                pixels.len() == display::RESOLUTION && pixels[0] == display::PIXEL_ON
            })
            .times(1)
            .return_const(());

        let mut keys = MockKeyboardCommands::new();
        keys.expect_get_keyboard()
            .times(3)
            .returning(|| [false; keyboard::SIZE]);

        let mut runner = Runner::new(chip, display, keys);
        assert_eq!(runner.tick(), Ok(Operation::None));
        assert_eq!(runner.tick(), Ok(Operation::None));
        assert_eq!(runner.tick(), Ok(Operation::Draw));
    }

    #[test]
    fn test_keyboard_snapshot_before_cycle() {
        // FX0A into V3
        let chip = chip_with(&[0xF30A]);

        let display = MockDisplayCommands::new();
        let mut keys = MockKeyboardCommands::new();
        let mut calls = 0;
        keys.expect_get_keyboard().times(2).returning(move || {
            calls += 1;
            let mut state = [false; keyboard::SIZE];
            if calls > 1 {
                state[0x9] = true;
            }
            state
        });

        let mut runner = Runner::new(chip, display, keys);
        assert_eq!(runner.tick(), Ok(Operation::Wait));
        assert_eq!(runner.chip().awaiting_key(), Some(0x3));

        assert_eq!(runner.tick(), Ok(Operation::None));
        let (chip, _, _) = runner.into_inner();
        assert_eq!(chip.get_registers()[0x3], 0x9);
        assert_eq!(chip.awaiting_key(), None);
        assert_eq!(chip.get_keyboard()[0x9], true);
    }

    #[test]
    fn test_run_stops_on_error() {
        // return without a call
        let chip = chip_with(&[0x6001, 0x00EE, 0x6002]);

        let display = MockDisplayCommands::new();
        let mut keys = MockKeyboardCommands::new();
        keys.expect_get_keyboard()
            .times(2)
            .returning(|| [false; keyboard::SIZE]);

        let mut runner = Runner::new(chip, display, keys);
        assert_eq!(
            runner.run(3),
            Err(ProcessError::Stack(crate::StackError::Empty))
        );
        assert_eq!(runner.chip_mut().get_registers()[0], 0x1);
    }
}
