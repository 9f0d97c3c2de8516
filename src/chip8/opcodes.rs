use crate::{
    config::SpriteEdge,
    definitions::{cpu, display},
    opcode::{
        ArithmeticOpcode, ChipOpcodes, KeyOpcode, MiscOpcode, Opcode, Operation,
        ProgramCounterStep,
    },
    ProcessError,
};

use super::ChipSet;

/// Moves a sprite pixel onto the screen according to the edge policy,
/// `None` if the pixel is clipped.
#[inline]
fn place(position: usize, limit: usize, edge: SpriteEdge) -> Option<usize> {
    match edge {
        SpriteEdge::Clip if position >= limit => None,
        SpriteEdge::Clip => Some(position),
        SpriteEdge::Wrap => Some(position % limit),
    }
}

impl ChipOpcodes for ChipSet {
    fn clear_display(&mut self) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // 00E0
        self.display.fill(display::PIXEL_OFF);
        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn return_from_subroutine(&mut self) -> Result<ProgramCounterStep, ProcessError> {
        // 00EE
        let pc = self.pop_stack()?;
        log::debug!("return to {:#06X}", pc);
        Ok(ProgramCounterStep::Jump(pc))
    }

    fn jump(&self, nnn: u16) -> ProgramCounterStep {
        // 1NNN
        ProgramCounterStep::Jump(nnn)
    }

    fn call_subroutine(&mut self, nnn: u16) -> Result<ProgramCounterStep, ProcessError> {
        // 2NNN
        // the program counter already points to the instruction after the call
        self.push_stack(self.program_counter)?;
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn skip_on_constant(&self, x: usize, nn: u8, equal: bool) -> ProgramCounterStep {
        // 3XNN / 4XNN
        ProgramCounterStep::cond((self.registers[x] == nn) == equal)
    }

    fn skip_on_register(&self, x: usize, y: usize, equal: bool) -> ProgramCounterStep {
        // 5XY0 / 9XY0
        ProgramCounterStep::cond((self.registers[x] == self.registers[y]) == equal)
    }

    fn set_register(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        // 6XNN
        self.registers[x] = nn;
        ProgramCounterStep::Next
    }

    fn add_to_register(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        // 7XNN
        // let VX overflow, but ignore carry
        self.registers[x] = self.registers[x].wrapping_add(nn);
        ProgramCounterStep::Next
    }

    fn arithmetic(&mut self, ops: ArithmeticOpcode, x: usize, y: usize) -> ProgramCounterStep {
        let vx = self.registers[x];
        let vy = self.registers[y];

        // the flag is written after the result, so that VF as the target
        // register ends up holding the flag
        let flag = match ops {
            ArithmeticOpcode::Assign => {
                self.registers[x] = vy;
                None
            }
            ArithmeticOpcode::Or => {
                self.registers[x] = vx | vy;
                None
            }
            ArithmeticOpcode::And => {
                self.registers[x] = vx & vy;
                None
            }
            ArithmeticOpcode::Xor => {
                self.registers[x] = vx ^ vy;
                None
            }
            ArithmeticOpcode::AddWithCarry => {
                let (res, carry) = vx.overflowing_add(vy);
                self.registers[x] = res;
                Some(carry as u8)
            }
            ArithmeticOpcode::SubtractWithBorrow => {
                self.registers[x] = vx.wrapping_sub(vy);
                Some((vx > vy) as u8)
            }
            ArithmeticOpcode::ShiftRight => {
                self.registers[x] = vx >> 1;
                Some(vx & 1)
            }
            ArithmeticOpcode::ReverseSubtract => {
                self.registers[x] = vy.wrapping_sub(vx);
                Some((vy > vx) as u8)
            }
            ArithmeticOpcode::ShiftLeft => {
                const SHIFT_SIGNIFICANT: u8 = 7;
                self.registers[x] = vx << 1;
                Some((vx >> SHIFT_SIGNIFICANT) & 1)
            }
        };

        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        ProgramCounterStep::Next
    }

    fn set_index(&mut self, nnn: u16) -> ProgramCounterStep {
        // ANNN
        self.index_register = nnn;
        ProgramCounterStep::Next
    }

    fn jump_with_offset(&self, nnn: u16) -> ProgramCounterStep {
        // BNNN
        // an address past the memory end is caught by the next fetch
        ProgramCounterStep::Jump(nnn + self.registers[0] as u16)
    }

    fn random(&mut self, x: usize, nn: u8) -> ProgramCounterStep {
        // CXNN
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[x] = nn & rand[0];
        ProgramCounterStep::Next
    }

    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // DXYN
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/
        let sprite = self.memory_range(self.index_register as usize, n)?;

        let origin_x = self.registers[x] as usize % display::WIDTH;
        let origin_y = self.registers[y] as usize % display::HEIGHT;
        let edge = self.config.sprite_edge;

        let mut collision = false;

        for (row, data) in self.memory[sprite].iter().enumerate() {
            let py = match place(origin_y + row, display::HEIGHT, edge) {
                Some(py) => py,
                None => break,
            };

            for column in 0..display::SPRITE_WIDTH {
                // most significant bit is the left most pixel
                let mask: u8 = 0x80 >> column;
                if *data & mask == 0 {
                    continue;
                }

                let px = match place(origin_x + column, display::WIDTH, edge) {
                    Some(px) => px,
                    None => break,
                };

                let pixel = &mut self.display[py * display::WIDTH + px];
                collision |= *pixel == display::PIXEL_ON;
                *pixel ^= display::PIXEL_ON;
            }
        }

        self.registers[cpu::register::LAST] = collision as u8;

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn skip_on_key(&self, ops: KeyOpcode, x: usize) -> ProgramCounterStep {
        let pressed = self.keyboard.is_pressed(self.registers[x] as usize);
        match ops {
            // EX9E
            KeyOpcode::Pressed => ProgramCounterStep::cond(pressed),
            // EXA1
            KeyOpcode::NotPressed => ProgramCounterStep::cond(!pressed),
        }
    }

    fn misc(
        &mut self,
        ops: MiscOpcode,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let mut op = Operation::None;
        let mut pcs = ProgramCounterStep::Next;
        match ops {
            MiscOpcode::GetDelayTimer => {
                // FX07
                self.registers[x] = self.delay_timer.get_value();
            }
            MiscOpcode::AwaitKeyPress => {
                // FX0A
                // Nothing blocks, the instruction is fetched again until a key is down.
                match self.keyboard.first_pressed() {
                    Some(key) => {
                        self.registers[x] = key as u8;
                        self.awaiting_key = None;
                    }
                    None => {
                        if self.awaiting_key.is_none() {
                            log::debug!("waiting for a key press into V{:X}", x);
                        }
                        self.awaiting_key = Some(x);
                        op = Operation::Wait;
                        pcs = ProgramCounterStep::Repeat;
                    }
                }
            }
            MiscOpcode::SetDelayTimer => {
                // FX15
                self.delay_timer.set_value(self.registers[x]);
            }
            MiscOpcode::SetSoundTimer => {
                // FX18
                self.sound_timer.set_value(self.registers[x]);
            }
            MiscOpcode::AddVxToI => {
                // FX1E
                // VF is not affected
                self.index_register = self.index_register.wrapping_add(self.registers[x] as u16);
            }
            MiscOpcode::SetIToSprite => {
                // FX29
                let val = self.registers[x] as u16;
                self.index_register =
                    self.config.font_location + display::fontset::GLYPH_SIZE * val;
            }
            MiscOpcode::StoreBCD => {
                // FX33
                let range = self.memory_range(self.index_register as usize, 3)?;
                let r = self.registers[x];

                self.memory[range].copy_from_slice(&[
                    r / 100,     // 246u8 / 100 => 2
                    r / 10 % 10, // 246u8 / 10 => 24 % 10 => 4
                    r % 10,      // 246u8 % 10 => 6
                ]);
            }
            MiscOpcode::StoreV0ToVx => {
                // FX55
                let range = self.memory_range(self.index_register as usize, x + 1)?;
                self.memory[range].copy_from_slice(&self.registers[..=x]);
            }
            MiscOpcode::FillV0ToVx => {
                // FX65
                let range = self.memory_range(self.index_register as usize, x + 1)?;
                self.registers[..=x].copy_from_slice(&self.memory[range]);
            }
        }
        Ok((pcs, op))
    }

    fn unknown(&mut self, opcode: Opcode) -> Result<ProgramCounterStep, ProcessError> {
        if self.config.strict_opcodes {
            return Err(ProcessError::UnknownInstruction(opcode));
        }
        log::warn!(
            "An unsupported opcode was used {:#06X?} at {:#06X}, skipping it.",
            opcode,
            self.program_counter.wrapping_sub(2)
        );
        Ok(ProgramCounterStep::Next)
    }
}
