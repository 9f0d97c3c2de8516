use std::ops::Range;

use {
    crate::{
        config::ChipConfig,
        definitions::{cpu, display, memory},
        devices::Keyboard,
        opcode::{self, Instruction, Opcode, Operation, ProgramCounter, ProgramCounterStep},
        resources::Rom,
        timer::Timer,
        LoadError, ProcessError, StackError,
    },
    rand::{rngs::StdRng, RngCore, SeedableRng},
    tinyvec::ArrayVec,
};

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// the options this chipset was created with
    pub(super) config: ChipConfig,
    /// the currently loaded rom, kept for resets
    pub(super) rom: Option<Rom>,
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Vec<u8>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called.
    /// Its length is the stack pointer.
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    /// Counts down once per cycle, until it reaches 0.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    /// Counts down once per cycle, until it reaches 0.
    pub(super) sound_timer: Timer,
    /// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
    /// `(64 x 32)`, stored row major. A pixel is either `PIXEL_OFF` or `PIXEL_ON`.
    pub(super) display: Vec<u32>,
    /// The hex keyboard, written by the host between cycles.
    pub(super) keyboard: Keyboard,
    /// Set to the target register while a `FX0A` waits for a key.
    pub(super) awaiting_key: Option<usize>,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl ChipSet {
    /// will create a new chipset object without a program
    pub fn new(config: ChipConfig) -> Self {
        let rng: Box<dyn RngCore + Send> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };

        let mut chip = Self {
            config,
            rom: None,
            opcode: 0,
            memory: vec![0; memory::SIZE],
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: vec![display::PIXEL_OFF; display::RESOLUTION],
            keyboard: Keyboard::new(),
            awaiting_key: None,
            rng,
        };
        chip.load_font();
        chip
    }

    /// will create a new chipset object and load the rom into it
    pub fn with_rom(rom: Rom, config: ChipConfig) -> Result<Self, LoadError> {
        let mut chip = Self::new(config);
        chip.load(&rom)?;
        Ok(chip)
    }

    /// Will replace the random number generator.
    pub fn set_rng(&mut self, rng: Box<dyn RngCore + Send>) {
        self.rng = rng;
    }

    fn load_font(&mut self) {
        let location = self.config.font_location as usize;
        let fontset = &display::fontset::FONTSET;
        self.memory[location..(location + fontset.len())].copy_from_slice(fontset);
    }

    /// Will write the rom into memory starting at the program counter start.
    ///
    /// On error the memory stays untouched.
    pub fn load(&mut self, rom: &Rom) -> Result<(), LoadError> {
        let data = rom.get_data();
        if data.len() > cpu::MAX_ROM_SIZE {
            return Err(LoadError::TooLarge {
                size: data.len(),
                max: cpu::MAX_ROM_SIZE,
            });
        }

        let start = cpu::PROGRAM_COUNTER as usize;
        self.memory[start..].fill(0);
        self.memory[start..(start + data.len())].copy_from_slice(data);

        log::info!("loaded rom '{}' ({} bytes)", rom.get_name(), data.len());
        self.rom = Some(rom.clone());
        Ok(())
    }

    /// Brings the chipset back into its power on state, the loaded rom stays
    /// loaded. The random number generator is left as is.
    pub fn reset(&mut self) {
        self.opcode = 0;
        self.memory.fill(0);
        self.load_font();
        if let Some(rom) = &self.rom {
            let start = cpu::PROGRAM_COUNTER as usize;
            let data = rom.get_data();
            self.memory[start..(start + data.len())].copy_from_slice(data);
        }
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer.set_value(0);
        self.sound_timer.set_value(0);
        self.display.fill(display::PIXEL_OFF);
        self.keyboard.reset();
        self.awaiting_key = None;
    }

    /// will get the next opcode from memory
    pub(super) fn fetch(&mut self) -> Result<Opcode, ProcessError> {
        // will build the opcode given from the pointer
        self.opcode = opcode::build_opcode(&self.memory, self.program_counter as usize)?;
        Ok(self.opcode)
    }

    /// will advance the program by a single cycle
    ///
    /// fetch -> move the program counter -> decode -> execute -> count down the timers
    pub fn cycle(&mut self) -> Result<Operation, ProcessError> {
        // import here as to not bloat the namespace
        use crate::opcode::ChipOpcodes;

        let opcode = self.fetch()?;
        log::debug!("pc {:#06X} opcode {:#06X}", self.program_counter, opcode);
        self.program_counter = self
            .program_counter
            .wrapping_add(memory::opcodes::SIZE);

        let instruction = Instruction::from(opcode);
        let operation = self.calc(&instruction)?;

        self.tick_timers();
        Ok(operation)
    }

    /// Counts down both timers by one.
    pub(super) fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
        log::trace!(
            "delay timer {} sound timer {}",
            self.delay_timer.get_value(),
            self.sound_timer.get_value()
        );
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keyboard.toggle_key(key)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// The register a `FX0A` is waiting to write the next key press into.
    pub fn awaiting_key(&self) -> Option<usize> {
        self.awaiting_key
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// Checks if the host should currently play a sound.
    pub fn sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return a immutable slice of the current display configuration
    pub fn get_display(&self) -> &[u32] {
        &self.display[..]
    }

    /// The opcode fetched during the last cycle.
    pub fn get_opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn get_stack(&self) -> &[u16] {
        &self.stack
    }

    pub fn get_memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn get_config(&self) -> &ChipConfig {
        &self.config
    }

    /// Will return the name of the loaded rom.
    pub fn get_name(&self) -> Option<&str> {
        self.rom.as_ref().map(|rom| rom.get_name())
    }

    /// Checks that `len` bytes starting at `address` lie inside of the memory.
    pub(super) fn memory_range(
        &self,
        address: usize,
        len: usize,
    ) -> Result<Range<usize>, ProcessError> {
        let end = address + len;
        if end <= self.memory.len() {
            Ok(address..end)
        } else {
            Err(ProcessError::MemoryFault { address, len })
        }
    }

    /// Will push the current pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        if self.stack.len() == self.stack.capacity() {
            Err(StackError::Full)
        } else {
            self.stack.push(pointer);
            Ok(())
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }
}

impl Default for ChipSet {
    fn default() -> Self {
        Self::new(ChipConfig::default())
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }
}
