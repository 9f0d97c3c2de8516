//! Opcode abstractions, functionality and constants.
use crate::{definitions::memory, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::OpcodeError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = OpcodeError::MemoryInvalid {pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(
/// #    Err(err),
/// #    build_opcode(&SPLIT_OPCODE, pointer)
/// # );
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode number form any opcode
    /// - `T` is the opcode type
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a nibble
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1000);
    /// ```
    fn t(&self) -> usize {
        (self & OPCODE_MASK_F000) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        const NIBBLE: u16 = BYTE_SIZE / 2;
        let y = ((self & MASK) >> NIBBLE) as usize;
        (x, y)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents how the program counter moves after an instruction was executed.
///
/// The counter already points past the executed instruction when
/// the step is applied.
pub enum ProgramCounterStep {
    /// Continue with the following instruction
    Next,
    /// Skip the following instruction
    Skip,
    /// Run the same instruction again
    Repeat,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Applies the step to the given program counter.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next.apply(0x202), 0x202);
    /// assert_eq!(ProgramCounterStep::Skip.apply(0x202), 0x204);
    /// assert_eq!(ProgramCounterStep::Repeat.apply(0x202), 0x200);
    /// assert_eq!(ProgramCounterStep::Jump(0x300).apply(0x202), 0x300);
    /// ```
    #[inline]
    pub fn apply(&self, pointer: u16) -> u16 {
        match *self {
            ProgramCounterStep::Next => pointer,
            ProgramCounterStep::Skip => pointer.wrapping_add(memory::opcodes::SIZE),
            ProgramCounterStep::Repeat => pointer.wrapping_sub(memory::opcodes::SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// generates the lookup for a sub opcode table
macro_rules! sub_opcode_table {
    ($type_name:ident : $type_from:ty : $( $key:literal => $val:ident ),+ $(,)? ) => {
        impl $type_name {
            fn decode(value: $type_from) -> Option<Self> {
                match value {
                    $(
                        $key => Some($type_name::$val),
                    )+
                    _ => None,
                }
            }
        }
    };
}

/// The register to register operations of the `8XYT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOpcode {
    Assign,
    Or,
    And,
    Xor,
    AddWithCarry,
    SubtractWithBorrow,
    ShiftRight,
    ReverseSubtract,
    ShiftLeft,
}

sub_opcode_table!(ArithmeticOpcode : usize :
    // 8XY0
    // Sets VX to the value of VY.
    0x0 => Assign,
    // 8XY1
    // Sets VX to VX or VY. (Bitwise OR operation)
    0x1 => Or,
    // 8XY2
    // Sets VX to VX and VY. (Bitwise AND operation)
    0x2 => And,
    // 8XY3
    // Sets VX to VX xor VY.
    0x3 => Xor,
    // 8XY4
    // Adds VY to VX. VF is set to 1 when there's a carry, and to 0 when there isn't.
    0x4 => AddWithCarry,
    // 8XY5
    // VY is subtracted from VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x5 => SubtractWithBorrow,
    // 8XY6
    // Stores the least significant bit of VX in VF and then shifts VX to the right
    // by 1.
    0x6 => ShiftRight,
    // 8XY7
    // Sets VX to VY minus VX. VF is set to 0 when there's a borrow, and 1 when there
    // isn't.
    0x7 => ReverseSubtract,
    // 8XYE
    // Stores the most significant bit of VX in VF and then shifts VX to the left by 1.
    0xE => ShiftLeft,
);

/// The keypad conditions of the `EXTT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOpcode {
    Pressed,
    NotPressed,
}

sub_opcode_table!(KeyOpcode : u8 :
    // EX9E
    0x9E => Pressed,
    // EXA1
    0xA1 => NotPressed,
);

/// The timer, keypad and memory operations of the `FXTT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOpcode {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBCD,
    StoreV0ToVx,
    FillV0ToVx,
}

sub_opcode_table!(MiscOpcode : u8 :
    0x07 => GetDelayTimer,
    0x0A => AwaitKeyPress,
    0x15 => SetDelayTimer,
    0x18 => SetSoundTimer,
    0x1E => AddVxToI,
    0x29 => SetIToSprite,
    0x33 => StoreBCD,
    0x55 => StoreV0ToVx,
    0x65 => FillV0ToVx,
);

/// A decoded instruction with all of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    ClearDisplay,
    /// `00EE`
    Return,
    /// `1NNN`
    Jump { nnn: u16 },
    /// `2NNN`
    Call { nnn: u16 },
    /// `3XNN`
    SkipIfEqual { x: usize, nn: u8 },
    /// `4XNN`
    SkipIfNotEqual { x: usize, nn: u8 },
    /// `5XY0`
    SkipIfRegistersEqual { x: usize, y: usize },
    /// `6XNN`
    SetRegister { x: usize, nn: u8 },
    /// `7XNN`
    AddToRegister { x: usize, nn: u8 },
    /// `8XYT`
    Arithmetic {
        ops: ArithmeticOpcode,
        x: usize,
        y: usize,
    },
    /// `9XY0`
    SkipIfRegistersNotEqual { x: usize, y: usize },
    /// `ANNN`
    SetIndex { nnn: u16 },
    /// `BNNN`
    JumpWithOffset { nnn: u16 },
    /// `CXNN`
    Random { x: usize, nn: u8 },
    /// `DXYN`
    Draw { x: usize, y: usize, n: usize },
    /// `EXTT`
    Key { ops: KeyOpcode, x: usize },
    /// `FXTT`
    Misc { ops: MiscOpcode, x: usize },
    /// Anything the architecture does not define, including `0NNN`.
    Unknown(Opcode),
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Self {
        // Shifting t here so that match can use a lookup table instead of 'if else' blocks
        const SHIFT: usize = 4 * 3;
        let decoded = match opcode.t() >> SHIFT {
            0x0 => match opcode {
                0x00E0 => Some(Instruction::ClearDisplay),
                0x00EE => Some(Instruction::Return),
                _ => None,
            },
            0x1 => Some(Instruction::Jump { nnn: opcode.nnn() }),
            0x2 => Some(Instruction::Call { nnn: opcode.nnn() }),
            0x3 => {
                let (x, nn) = opcode.xnn();
                Some(Instruction::SkipIfEqual { x, nn })
            }
            0x4 => {
                let (x, nn) = opcode.xnn();
                Some(Instruction::SkipIfNotEqual { x, nn })
            }
            0x5 => match opcode.xyn() {
                (x, y, 0) => Some(Instruction::SkipIfRegistersEqual { x, y }),
                _ => None,
            },
            0x6 => {
                let (x, nn) = opcode.xnn();
                Some(Instruction::SetRegister { x, nn })
            }
            0x7 => {
                let (x, nn) = opcode.xnn();
                Some(Instruction::AddToRegister { x, nn })
            }
            0x8 => {
                let (x, y, n) = opcode.xyn();
                ArithmeticOpcode::decode(n).map(|ops| Instruction::Arithmetic { ops, x, y })
            }
            0x9 => match opcode.xyn() {
                (x, y, 0) => Some(Instruction::SkipIfRegistersNotEqual { x, y }),
                _ => None,
            },
            0xA => Some(Instruction::SetIndex { nnn: opcode.nnn() }),
            0xB => Some(Instruction::JumpWithOffset { nnn: opcode.nnn() }),
            0xC => {
                let (x, nn) = opcode.xnn();
                Some(Instruction::Random { x, nn })
            }
            0xD => {
                let (x, y, n) = opcode.xyn();
                Some(Instruction::Draw { x, y, n })
            }
            0xE => {
                let (x, nn) = opcode.xnn();
                KeyOpcode::decode(nn).map(|ops| Instruction::Key { ops, x })
            }
            0xF => {
                let (x, nn) = opcode.xnn();
                MiscOpcode::decode(nn).map(|ops| Instruction::Misc { ops, x })
            }
            _ => None,
        };
        decoded.unwrap_or(Instruction::Unknown(opcode))
    }
}

/// Decodes a raw instruction word.
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// assert_eq!(decode(0x00E0), Instruction::ClearDisplay);
/// assert_eq!(decode(0x6A2F), Instruction::SetRegister { x: 0xA, nn: 0x2F });
/// assert_eq!(decode(0xE1FF), Instruction::Unknown(0xE1FF));
/// ```
#[inline]
pub fn decode(opcode: Opcode) -> Instruction {
    Instruction::from(opcode)
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The chip is stalled until a key gets pressed.
    Wait,
    /// The display has changed.
    Draw,
}

/// These are the traits that have to be full filled for a working instruction
/// table.
///
/// This trait requires the implementation of the  [`ProgramCounter`](ProgramCounter) trait for the step
/// functionality.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute a single decoded instruction
    fn calc(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match *instruction {
            Instruction::ClearDisplay => self.clear_display().map(step_op),
            Instruction::Return => self.return_from_subroutine(),
            Instruction::Jump { nnn } => Ok(self.jump(nnn)),
            Instruction::Call { nnn } => self.call_subroutine(nnn),
            Instruction::SkipIfEqual { x, nn } => Ok(self.skip_on_constant(x, nn, true)),
            Instruction::SkipIfNotEqual { x, nn } => Ok(self.skip_on_constant(x, nn, false)),
            Instruction::SkipIfRegistersEqual { x, y } => Ok(self.skip_on_register(x, y, true)),
            Instruction::SkipIfRegistersNotEqual { x, y } => {
                Ok(self.skip_on_register(x, y, false))
            }
            Instruction::SetRegister { x, nn } => Ok(self.set_register(x, nn)),
            Instruction::AddToRegister { x, nn } => Ok(self.add_to_register(x, nn)),
            Instruction::Arithmetic { ops, x, y } => Ok(self.arithmetic(ops, x, y)),
            Instruction::SetIndex { nnn } => Ok(self.set_index(nnn)),
            Instruction::JumpWithOffset { nnn } => Ok(self.jump_with_offset(nnn)),
            Instruction::Random { x, nn } => Ok(self.random(x, nn)),
            Instruction::Draw { x, y, n } => self.draw(x, y, n).map(step_op),
            Instruction::Key { ops, x } => Ok(self.skip_on_key(ops, x)),
            Instruction::Misc { ops, x } => self.misc(ops, x).map(step_op),
            Instruction::Unknown(opcode) => self.unknown(opcode),
        }?;

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    fn clear_display(&mut self) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    ///
    /// Fails if the stack is empty.
    fn return_from_subroutine(&mut self) -> Result<ProgramCounterStep, ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, nnn: u16) -> ProgramCounterStep;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    ///
    /// Fails if the stack is full.
    fn call_subroutine(&mut self, nnn: u16) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond    - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_on_constant(&self, x: usize, nn: u8, equal: bool) -> ProgramCounterStep;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_on_register(&self, x: usize, y: usize, equal: bool) -> ProgramCounterStep;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn set_register(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add_to_register(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `1` if `VX` was bigger than `VY`, else `0`.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `1` if `VY` was bigger than `VX`, else `0`.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(&mut self, ops: ArithmeticOpcode, x: usize, y: usize) -> ProgramCounterStep;

    /// - `ANNN` - MEM    - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, nnn: u16) -> ProgramCounterStep;

    /// - `BNNN` - Flow    - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_with_offset(&self, nnn: u16) -> ProgramCounterStep;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to the result of a bitwise and operation on a random number (Typically: `0 to 255`) and `NN`.
    fn random(&mut self, x: usize, nn: u8) -> ProgramCounterStep;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row of `8` pixels is read as bit-coded starting from memory location `I`; `I` value doesn’t change after the execution of this instruction. `VF` is set to `1` if any screen pixels are flipped from set to unset when the sprite is drawn, and to `0` if that doesn’t happen
    ///
    /// Fails if the sprite data lies outside of the memory.
    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// A multiuse opcode base for type `EXTT` (T is a sub opcode)
    ///
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn skip_on_key(&self, ops: KeyOpcode, x: usize) -> ProgramCounterStep;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`. The instruction is repeated until a key is pressed.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the sprite for the character in `VX`.
    /// - `FX33` - BCD      - `246 / 100 => 2` `246 / 10 => 24 % 10 => 4` `246 % 10 => 6` - Stores the [binary-coded decimal](https://en.wikipedia.org/wiki/Binary-coded_decimal) representation of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`. `I` itself is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` itself is left unmodified.
    ///
    /// Fails if a memory access lies outside of the memory.
    fn misc(
        &mut self,
        ops: MiscOpcode,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// Handles a word the architecture does not define.
    fn unknown(&mut self, opcode: Opcode) -> Result<ProgramCounterStep, ProcessError>;
}
