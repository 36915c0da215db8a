//! Fixed constants for the memory map, clock and interrupt vectors.

/// Address of the fixed ROM entry point.
pub const ROM_ENTRY_POINT: u16 = 0x0100;

pub const ROM_BANK_0_START: u16 = 0x0000;
pub const ROM_BANK_N_END: u16 = 0x7fff;

pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9fff;

pub const ERAM_START: u16 = 0xa000;
pub const ERAM_END: u16 = 0xbfff;

pub const WRAM_START: u16 = 0xc000;
pub const WRAM_END: u16 = 0xdfff;

pub const ECHO_START: u16 = 0xe000;
pub const ECHO_END: u16 = 0xfdff;

pub const OAM_START: u16 = 0xfe00;
pub const OAM_END: u16 = 0xfe9f;

pub const PAD_ADDR: u16 = 0xff00;

pub const IF_ADDR: u16 = 0xff0f;

pub const LCDC_ADDR: u16 = 0xff40;
pub const STAT_ADDR: u16 = 0xff41;
pub const LY_ADDR: u16 = 0xff44;
pub const LYC_ADDR: u16 = 0xff45;

pub const HRAM_START: u16 = 0xff80;
pub const HRAM_END: u16 = 0xfffe;

pub const IE_ADDR: u16 = 0xffff;

/// Nominal clock speed of the DMG, in cycles per second.
pub const CPU_FREQ: u32 = 4_194_304;

/// Cycles that make up a single visible or vblank scanline.
pub const CYCLES_PER_LINE: u16 = 456;

/// Duration, in cycles, of the OAM-scan mode of a visible scanline.
pub const CYCLES_OAM_SCAN: u16 = 80;

/// Duration, in cycles, of the OAM+VRAM-read mode of a visible scanline.
pub const CYCLES_VRAM_READ: u16 = 172;

/// Duration, in cycles, of the horizontal-blank mode of a visible scanline.
pub const CYCLES_HBLANK: u16 = 204;

/// Last visible scanline, inclusive.
pub const LAST_VISIBLE_LINE: u8 = 143;

/// Last scanline of the frame, inclusive (10 vblank lines follow line 143).
pub const LAST_LINE: u8 = 153;

/// Total cycle count of a complete frame (456 * 154).
pub const CYCLES_PER_FRAME: u32 = CYCLES_PER_LINE as u32 * (LAST_LINE as u32 + 1);

/// Cycles charged for dispatching an interrupt.
pub const INTERRUPT_DISPATCH_CYCLES: u8 = 20;

pub const VBLANK_VECTOR: u16 = 0x0040;
pub const LCD_STAT_VECTOR: u16 = 0x0048;
pub const TIMER_VECTOR: u16 = 0x0050;
pub const SERIAL_VECTOR: u16 = 0x0058;
pub const JOYPAD_VECTOR: u16 = 0x0060;

pub const VBLANK_BIT: u8 = 0x01;
pub const LCD_STAT_BIT: u8 = 0x02;
pub const TIMER_BIT: u8 = 0x04;
pub const SERIAL_BIT: u8 = 0x08;
pub const JOYPAD_BIT: u8 = 0x10;
