//! The top level aggregate: wires the CPU (which owns the bus), the PPU
//! timing engine and the real-time pacer together, and owns the power-up
//! and cartridge-loading sequence.

use crate::{
    consts::CYCLES_PER_FRAME,
    cpu::Cpu,
    error::Error,
    mmu::Mmu,
    pacer::Pacer,
    pad::PadKey,
    ppu::Ppu,
    rom::Cartridge,
};

/// Visual refresh rate of the real hardware, in Hz.
pub const VISUAL_FREQ: f32 = 59.7275;

/// The assembled emulator.
pub struct GameBoy {
    cpu: Cpu,
    ppu: Ppu,
    pacer: Pacer,
}

impl GameBoy {
    /// Builds a GameBoy with every component in its documented power-up
    /// state. No cartridge is loaded yet.
    pub fn new() -> Self {
        let mut cpu = Cpu::new(Mmu::new());
        cpu.power_on();
        Self {
            cpu,
            ppu: Ppu::new(),
            pacer: Pacer::new(),
        }
    }

    pub fn cpu(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Loads a cartridge into ROM space and re-applies the power-up
    /// sequence so execution starts from the documented reset state.
    pub fn load_cartridge(&mut self, cartridge: &Cartridge) -> Result<(), Error> {
        self.cpu.mmu.load_rom(cartridge.data())?;
        self.cpu.power_on();
        self.ppu = Ppu::new();
        Ok(())
    }

    pub fn key_press(&mut self, key: PadKey) {
        self.cpu.mmu.pad().key_press(key);
    }

    pub fn key_lift(&mut self, key: PadKey) {
        self.cpu.mmu.pad().key_lift(key);
    }

    /// Retires exactly one instruction (or interrupt dispatch), advances
    /// the PPU timing engine by the same number of cycles, and returns the
    /// cycle count so callers can drive a frame-cycle budget.
    pub fn clock(&mut self) -> u8 {
        let cycles = self.cpu.clock();
        self.ppu.clock(&mut self.cpu.mmu, cycles);
        cycles
    }

    /// Retires instructions until at least one full frame's worth of
    /// cycles (70224) has elapsed, pacing each batch against the wall
    /// clock so the loop tracks real time rather than running ahead.
    pub fn next_frame(&mut self) {
        let mut elapsed: u32 = 0;
        while elapsed < CYCLES_PER_FRAME {
            let cycles = self.clock();
            elapsed += cycles as u32;
            self.pacer.pace(cycles);
        }
    }

    /// Human-readable diagnostic dump, consulted by [`crate::diag`]'s panic
    /// handlers.
    pub fn description_debug(&self) -> String {
        format!(
            "PC=0x{:04x} SP=0x{:04x} AF=0x{:04x} IME={} halted={} PPU mode={:?} LY={}",
            self.cpu.pc,
            self.cpu.sp,
            self.cpu.af(),
            self.cpu.ime,
            self.cpu.halted,
            self.ppu.mode(),
            self.ppu.ly(),
        )
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let mut gb = GameBoy::new();
        assert_eq!(gb.cpu().pc, 0x0100);
        assert_eq!(gb.cpu().sp, 0xfffe);
        assert_eq!(gb.cpu().af(), 0x01b0);
    }

    #[test]
    fn test_load_cartridge_accepts_exact_size() {
        let mut gb = GameBoy::new();
        let cart = Cartridge::from_data(&[0u8; 32768]).unwrap();
        assert!(gb.load_cartridge(&cart).is_ok());
    }

    #[test]
    fn test_clock_advances_pc_past_a_nop() {
        let mut gb = GameBoy::new();
        gb.cpu().mmu.raw_write(0x0100, 0x00); // NOP
        let start = gb.cpu().pc;
        gb.clock();
        assert_eq!(gb.cpu().pc, start.wrapping_add(1));
    }

    #[test]
    fn test_description_debug_contains_pc() {
        let gb = GameBoy::new();
        assert!(gb.description_debug().contains("PC=0x0100"));
    }
}
