use std::fmt;
use std::path::Path;

use phf::phf_map;

#[derive(Debug)]
pub(crate) struct CPU {
    // More info about the 6502 registers can be found here:
    // https://www.nesdev.org/obelisk-6502-guide/registers.html

    // The program counter is a 16 bit register holding the address of the next
    // instruction byte to fetch. It advances automatically during decoding and
    // is rewritten by jumps, branches, subroutine calls and interrupts.
    pub program_counter: u16,

    // The stack pointer is an 8 bit register holding the low byte of the next
    // free location on the stack. The stack always lives in page 1
    // (0x0100 - 0x01FF) and grows downwards; wraparound is silent 8-bit math.
    pub stack_pointer: u8,

    // The accumulator is an 8 bit register used for arithmetic and logical operations.
    pub accumulator: u8,

    // The X index register, most commonly used for counters and memory offsets.
    pub x_register: u8,

    // The Y index register, the counterpart of X with its own addressing modes.
    pub y_register: u8,

    // Processor status. Each bit records the outcome of previous operations:
    // Bit 7: Negative Flag (N)
    // Bit 6: Overflow Flag (V)
    // Bit 5: Unused (always pushed as 1)
    // Bit 4: Break Command (B) (only meaningful in pushed copies)
    // Bit 3: Decimal Mode Flag (D) (latched but not honoured by ADC/SBC)
    // Bit 2: Interrupt Disable (I)
    // Bit 1: Zero Flag (Z)
    // Bit 0: Carry Flag (C)
    pub status_register: u8,

    // The full 64KB address space as flat RAM. The core performs no memory
    // mapping; hosts that need devices sit on top of read_u8/write_u8.
    memory: [u8; 0x10000],

    // Interrupt request latches. Set by raise_* and consumed at the top of step.
    nmi_pending: bool,
    irq_pending: bool,
    reset_pending: bool,

    // Number of instructions and serviced interrupts since init.
    pub step_count: u64,

    // Global cycle counter (counts CPU cycles executed).
    pub cycles: u64,

    // Cycle cost of the most recent step, for hosts that pace execution.
    pub cycles_last: u8,

    // Per-step surcharges deposited by the addressing-mode resolver and folded
    // into cycles_last by the instruction handlers.
    pub(crate) read_cycles: u8,
    pub(crate) write_cycles: u8,
}

// Each flag corresponds to a bit in the status register
// Values are the bit positions
#[derive(Debug, Clone, Copy)]
pub(crate) enum StatusFlag {
    Carry = 0,
    Zero = 1,
    InterruptDisable = 2,
    DecimalMode = 3,
    BreakCommand = 4,
    Unused = 5,
    Overflow = 6,
    Negative = 7,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum AddressingMode {
    Absolute,    // e.g. LDA $1234
    AbsoluteX,   // e.g. LDA $1234,X
    AbsoluteY,   // e.g. LDA $1234,Y
    Accumulator, // e.g. ASL A
    Immediate,   // e.g. LDA #$10
    Implicit,    // e.g. CLC, INX (no operand)
    Indirect,    // e.g. JMP ($1234)
    IndirectX,   // e.g. LDA ($10,X)
    IndirectY,   // e.g. LDA ($10),Y
    Relative,    // e.g. BEQ +5
    ZeroPage,    // e.g. LDA $10
    ZeroPageX,   // e.g. LDA $10,X
    ZeroPageY,   // e.g. LDX $10,Y
}

// What an addressing mode resolved to. Instruction handlers read and write
// through this, so the accumulator never masquerades as a memory address and
// the public memory interface only ever sees real memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    None,
    Accumulator,
    Address(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepError {
    // The fetched byte does not decode to a legal instruction. The program
    // counter is left on the byte following the bad opcode.
    InvalidOpcode { opcode: u8, address: u16 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::InvalidOpcode { opcode, address } => {
                write!(f, "invalid opcode {:02X} at {:04X}", opcode, address)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Opcode {
    pub name: &'static str,
    // Function pointer to the instruction handler
    pub handler: fn(&mut CPU, Operand),
    pub addressing_mode: AddressingMode,
}

// List of all legal opcodes and their corresponding handler definitions.
// Every byte not present here is an undefined opcode and fails decoding.
static OPCODE_MAP: phf::Map<u8, Opcode> = phf_map! {
    // ADC Instructions
    0x69u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::Immediate },
    0x65u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::ZeroPage },
    0x75u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::ZeroPageX },
    0x6Du8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::Absolute },
    0x7Du8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::AbsoluteX },
    0x79u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::AbsoluteY },
    0x61u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::IndirectX },
    0x71u8 => Opcode { name: "ADC", handler: CPU::handle_adc, addressing_mode: AddressingMode::IndirectY },

    // AND Instructions
    0x29u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::Immediate },
    0x25u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::ZeroPage },
    0x35u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::ZeroPageX },
    0x2Du8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::Absolute },
    0x3Du8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::AbsoluteX },
    0x39u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::AbsoluteY },
    0x21u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::IndirectX },
    0x31u8 => Opcode { name: "AND", handler: CPU::handle_and, addressing_mode: AddressingMode::IndirectY },

    // ASL Instructions
    0x0Au8 => Opcode { name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::Accumulator },
    0x06u8 => Opcode { name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::ZeroPage },
    0x16u8 => Opcode { name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::ZeroPageX },
    0x0Eu8 => Opcode { name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::Absolute },
    0x1Eu8 => Opcode { name: "ASL", handler: CPU::handle_asl, addressing_mode: AddressingMode::AbsoluteX },

    // Branch Instructions
    0x90u8 => Opcode { name: "BCC", handler: CPU::handle_bcc, addressing_mode: AddressingMode::Relative },
    0xB0u8 => Opcode { name: "BCS", handler: CPU::handle_bcs, addressing_mode: AddressingMode::Relative },
    0xF0u8 => Opcode { name: "BEQ", handler: CPU::handle_beq, addressing_mode: AddressingMode::Relative },
    0x30u8 => Opcode { name: "BMI", handler: CPU::handle_bmi, addressing_mode: AddressingMode::Relative },
    0xD0u8 => Opcode { name: "BNE", handler: CPU::handle_bne, addressing_mode: AddressingMode::Relative },
    0x10u8 => Opcode { name: "BPL", handler: CPU::handle_bpl, addressing_mode: AddressingMode::Relative },
    0x50u8 => Opcode { name: "BVC", handler: CPU::handle_bvc, addressing_mode: AddressingMode::Relative },
    0x70u8 => Opcode { name: "BVS", handler: CPU::handle_bvs, addressing_mode: AddressingMode::Relative },

    // BIT Instructions
    0x24u8 => Opcode { name: "BIT", handler: CPU::handle_bit, addressing_mode: AddressingMode::ZeroPage },
    0x2Cu8 => Opcode { name: "BIT", handler: CPU::handle_bit, addressing_mode: AddressingMode::Absolute },

    // BRK Instructions
    0x00u8 => Opcode { name: "BRK", handler: CPU::handle_brk, addressing_mode: AddressingMode::Implicit },

    // Flag Instructions
    0x18u8 => Opcode { name: "CLC", handler: CPU::handle_clc, addressing_mode: AddressingMode::Implicit },
    0xD8u8 => Opcode { name: "CLD", handler: CPU::handle_cld, addressing_mode: AddressingMode::Implicit },
    0x58u8 => Opcode { name: "CLI", handler: CPU::handle_cli, addressing_mode: AddressingMode::Implicit },
    0xB8u8 => Opcode { name: "CLV", handler: CPU::handle_clv, addressing_mode: AddressingMode::Implicit },
    0x38u8 => Opcode { name: "SEC", handler: CPU::handle_sec, addressing_mode: AddressingMode::Implicit },
    0xF8u8 => Opcode { name: "SED", handler: CPU::handle_sed, addressing_mode: AddressingMode::Implicit },
    0x78u8 => Opcode { name: "SEI", handler: CPU::handle_sei, addressing_mode: AddressingMode::Implicit },

    // CMP Instructions
    0xC9u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::Immediate },
    0xC5u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::ZeroPage },
    0xD5u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::ZeroPageX },
    0xCDu8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::Absolute },
    0xDDu8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::AbsoluteX },
    0xD9u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::AbsoluteY },
    0xC1u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::IndirectX },
    0xD1u8 => Opcode { name: "CMP", handler: CPU::handle_cmp, addressing_mode: AddressingMode::IndirectY },

    // CPX Instructions
    0xE0u8 => Opcode { name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::Immediate },
    0xE4u8 => Opcode { name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::ZeroPage },
    0xECu8 => Opcode { name: "CPX", handler: CPU::handle_cpx, addressing_mode: AddressingMode::Absolute },

    // CPY Instructions
    0xC0u8 => Opcode { name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::Immediate },
    0xC4u8 => Opcode { name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::ZeroPage },
    0xCCu8 => Opcode { name: "CPY", handler: CPU::handle_cpy, addressing_mode: AddressingMode::Absolute },

    // DEC Instructions
    0xC6u8 => Opcode { name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::ZeroPage },
    0xD6u8 => Opcode { name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::ZeroPageX },
    0xCEu8 => Opcode { name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::Absolute },
    0xDEu8 => Opcode { name: "DEC", handler: CPU::handle_dec, addressing_mode: AddressingMode::AbsoluteX },
    0xCAu8 => Opcode { name: "DEX", handler: CPU::handle_dex, addressing_mode: AddressingMode::Implicit },
    0x88u8 => Opcode { name: "DEY", handler: CPU::handle_dey, addressing_mode: AddressingMode::Implicit },

    // EOR Instructions
    0x49u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::Immediate },
    0x45u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::ZeroPage },
    0x55u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::ZeroPageX },
    0x4Du8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::Absolute },
    0x5Du8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::AbsoluteX },
    0x59u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::AbsoluteY },
    0x41u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::IndirectX },
    0x51u8 => Opcode { name: "EOR", handler: CPU::handle_eor, addressing_mode: AddressingMode::IndirectY },

    // INC Instructions
    0xE6u8 => Opcode { name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::ZeroPage },
    0xF6u8 => Opcode { name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::ZeroPageX },
    0xEEu8 => Opcode { name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::Absolute },
    0xFEu8 => Opcode { name: "INC", handler: CPU::handle_inc, addressing_mode: AddressingMode::AbsoluteX },
    0xE8u8 => Opcode { name: "INX", handler: CPU::handle_inx, addressing_mode: AddressingMode::Implicit },
    0xC8u8 => Opcode { name: "INY", handler: CPU::handle_iny, addressing_mode: AddressingMode::Implicit },

    // JMP Instructions
    0x4Cu8 => Opcode { name: "JMP", handler: CPU::handle_jmp, addressing_mode: AddressingMode::Absolute },
    0x6Cu8 => Opcode { name: "JMP", handler: CPU::handle_jmp, addressing_mode: AddressingMode::Indirect },

    // JSR Instructions
    0x20u8 => Opcode { name: "JSR", handler: CPU::handle_jsr, addressing_mode: AddressingMode::Absolute },

    // LDA Instructions
    0xA9u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::Immediate },
    0xA5u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::ZeroPage },
    0xB5u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::ZeroPageX },
    0xADu8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::Absolute },
    0xBDu8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::AbsoluteX },
    0xB9u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::AbsoluteY },
    0xA1u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::IndirectX },
    0xB1u8 => Opcode { name: "LDA", handler: CPU::handle_lda, addressing_mode: AddressingMode::IndirectY },

    // LDX Instructions
    0xA2u8 => Opcode { name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::Immediate },
    0xA6u8 => Opcode { name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::ZeroPage },
    0xB6u8 => Opcode { name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::ZeroPageY },
    0xAEu8 => Opcode { name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::Absolute },
    0xBEu8 => Opcode { name: "LDX", handler: CPU::handle_ldx, addressing_mode: AddressingMode::AbsoluteY },

    // LDY Instructions
    0xA0u8 => Opcode { name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::Immediate },
    0xA4u8 => Opcode { name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::ZeroPage },
    0xB4u8 => Opcode { name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::ZeroPageX },
    0xACu8 => Opcode { name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::Absolute },
    0xBCu8 => Opcode { name: "LDY", handler: CPU::handle_ldy, addressing_mode: AddressingMode::AbsoluteX },

    // LSR Instructions
    0x4Au8 => Opcode { name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::Accumulator },
    0x46u8 => Opcode { name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::ZeroPage },
    0x56u8 => Opcode { name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::ZeroPageX },
    0x4Eu8 => Opcode { name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::Absolute },
    0x5Eu8 => Opcode { name: "LSR", handler: CPU::handle_lsr, addressing_mode: AddressingMode::AbsoluteX },

    // NOP Instructions
    0xEAu8 => Opcode { name: "NOP", handler: CPU::handle_nop, addressing_mode: AddressingMode::Implicit },

    // ORA Instructions
    0x09u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::Immediate },
    0x05u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::ZeroPage },
    0x15u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::ZeroPageX },
    0x0Du8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::Absolute },
    0x1Du8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::AbsoluteX },
    0x19u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::AbsoluteY },
    0x01u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::IndirectX },
    0x11u8 => Opcode { name: "ORA", handler: CPU::handle_ora, addressing_mode: AddressingMode::IndirectY },

    // Stack Instructions
    0x48u8 => Opcode { name: "PHA", handler: CPU::handle_pha, addressing_mode: AddressingMode::Implicit },
    0x08u8 => Opcode { name: "PHP", handler: CPU::handle_php, addressing_mode: AddressingMode::Implicit },
    0x68u8 => Opcode { name: "PLA", handler: CPU::handle_pla, addressing_mode: AddressingMode::Implicit },
    0x28u8 => Opcode { name: "PLP", handler: CPU::handle_plp, addressing_mode: AddressingMode::Implicit },

    // ROL Instructions
    0x2Au8 => Opcode { name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::Accumulator },
    0x26u8 => Opcode { name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::ZeroPage },
    0x36u8 => Opcode { name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::ZeroPageX },
    0x2Eu8 => Opcode { name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::Absolute },
    0x3Eu8 => Opcode { name: "ROL", handler: CPU::handle_rol, addressing_mode: AddressingMode::AbsoluteX },

    // ROR Instructions
    0x6Au8 => Opcode { name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::Accumulator },
    0x66u8 => Opcode { name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::ZeroPage },
    0x76u8 => Opcode { name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::ZeroPageX },
    0x6Eu8 => Opcode { name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::Absolute },
    0x7Eu8 => Opcode { name: "ROR", handler: CPU::handle_ror, addressing_mode: AddressingMode::AbsoluteX },

    // RTI Instructions
    0x40u8 => Opcode { name: "RTI", handler: CPU::handle_rti, addressing_mode: AddressingMode::Implicit },

    // RTS Instructions
    0x60u8 => Opcode { name: "RTS", handler: CPU::handle_rts, addressing_mode: AddressingMode::Implicit },

    // SBC Instructions
    0xE9u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::Immediate },
    0xE5u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::ZeroPage },
    0xF5u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::ZeroPageX },
    0xEDu8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::Absolute },
    0xFDu8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::AbsoluteX },
    0xF9u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::AbsoluteY },
    0xE1u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::IndirectX },
    0xF1u8 => Opcode { name: "SBC", handler: CPU::handle_sbc, addressing_mode: AddressingMode::IndirectY },

    // STA Instructions
    0x85u8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::ZeroPage },
    0x95u8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::ZeroPageX },
    0x8Du8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::Absolute },
    0x9Du8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::AbsoluteX },
    0x99u8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::AbsoluteY },
    0x81u8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::IndirectX },
    0x91u8 => Opcode { name: "STA", handler: CPU::handle_sta, addressing_mode: AddressingMode::IndirectY },

    // STX Instructions
    0x86u8 => Opcode { name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::ZeroPage },
    0x96u8 => Opcode { name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::ZeroPageY },
    0x8Eu8 => Opcode { name: "STX", handler: CPU::handle_stx, addressing_mode: AddressingMode::Absolute },

    // STY Instructions
    0x84u8 => Opcode { name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::ZeroPage },
    0x94u8 => Opcode { name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::ZeroPageX },
    0x8Cu8 => Opcode { name: "STY", handler: CPU::handle_sty, addressing_mode: AddressingMode::Absolute },

    // Transfer Instructions
    0xAAu8 => Opcode { name: "TAX", handler: CPU::handle_tax, addressing_mode: AddressingMode::Implicit },
    0xA8u8 => Opcode { name: "TAY", handler: CPU::handle_tay, addressing_mode: AddressingMode::Implicit },
    0xBAu8 => Opcode { name: "TSX", handler: CPU::handle_tsx, addressing_mode: AddressingMode::Implicit },
    0x8Au8 => Opcode { name: "TXA", handler: CPU::handle_txa, addressing_mode: AddressingMode::Implicit },
    0x9Au8 => Opcode { name: "TXS", handler: CPU::handle_txs, addressing_mode: AddressingMode::Implicit },
    0x98u8 => Opcode { name: "TYA", handler: CPU::handle_tya, addressing_mode: AddressingMode::Implicit },
};

pub(crate) fn new_cpu() -> CPU {
    let mut cpu = CPU {
        program_counter: 0x0000,
        stack_pointer: 0x00,
        accumulator: 0x00,
        x_register: 0x00,
        y_register: 0x00,
        status_register: 0x00,
        memory: [0x00; 0x10000],
        nmi_pending: false,
        irq_pending: false,
        reset_pending: false,
        step_count: 0,
        cycles: 0,
        cycles_last: 0,
        read_cycles: 0,
        write_cycles: 0,
    };
    cpu.init();
    cpu
}

/// Formats a one-line snapshot of the machine: the current PC, the mnemonic
/// about to execute, the registers and both counters.
pub(crate) fn trace(cpu: &CPU) -> String {
    let opcode = cpu.read_u8(cpu.program_counter);
    let name = OPCODE_MAP.get(&opcode).map_or("???", |entry| entry.name);
    format!(
        "{:04X}  {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{} SC:{}",
        cpu.program_counter,
        name,
        cpu.accumulator,
        cpu.x_register,
        cpu.y_register,
        cpu.status_register,
        cpu.stack_pointer,
        cpu.cycles,
        cpu.step_count,
    )
}

#[allow(dead_code)]
impl CPU {
    pub(crate) const STACK_BASE_ADDRESS: u16 = 0x0100;
    pub(crate) const STACK_POINTER_DEFAULT: u8 = 0xFF;
    // I and the unused bit start out set.
    pub(crate) const STATUS_REGISTER_DEFAULT: u8 = 0x24;
    pub(crate) const DEFAULT_PROGRAM_START: u16 = 0x0200;
    pub(crate) const NMI_VECTOR_ADDRESS: u16 = 0xFFFA;
    pub(crate) const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
    pub(crate) const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;

    /// Resets every piece of machine state to the power-on defaults. Memory is
    /// filled with 0xFF, a byte that does not decode to a legal instruction.
    pub(crate) fn init(&mut self) {
        self.program_counter = Self::DEFAULT_PROGRAM_START;
        self.stack_pointer = Self::STACK_POINTER_DEFAULT;
        self.accumulator = 0x00;
        self.x_register = 0x00;
        self.y_register = 0x00;
        self.status_register = Self::STATUS_REGISTER_DEFAULT;
        self.memory.fill(0xFF);
        self.nmi_pending = false;
        self.irq_pending = false;
        self.reset_pending = false;
        self.step_count = 0;
        self.cycles = 0;
        self.cycles_last = 0;
        self.read_cycles = 0;
        self.write_cycles = 0;
    }

    pub(crate) fn read_u8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    pub(crate) fn write_u8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    pub(crate) fn read_u16(&self, addr: u16) -> u16 {
        // We use little-endian format: low byte at addr, high byte at addr + 1.
        // The high-byte address wraps at the top of the address space.
        u16::from_le_bytes([self.read_u8(addr), self.read_u8(addr.wrapping_add(1))])
    }

    pub(crate) fn write_u16(&mut self, addr: u16, value: u16) {
        let [low, high] = u16::to_le_bytes(value);
        self.write_u8(addr, low);
        self.write_u8(addr.wrapping_add(1), high);
    }

    pub(crate) fn set_status_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.status_register |= 1 << (flag as u8);
        } else {
            self.status_register &= !(1 << (flag as u8));
        }
    }

    pub(crate) fn get_status_flag(&self, flag: StatusFlag) -> bool {
        (self.status_register & (1 << (flag as u8))) != 0
    }

    /// Sets Z and N from a value just written to a register or memory cell.
    /// Stores (STA/STX/STY) bypass this on purpose.
    pub(crate) fn update_zero_negative_flags(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, (value & 0x80) != 0);
    }

    /// Pushes a byte onto the stack.
    pub(crate) fn push_u8(&mut self, value: u8) {
        let stack_addr = Self::STACK_BASE_ADDRESS | self.stack_pointer as u16;
        self.write_u8(stack_addr, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    /// Pushes a 16-bit word onto the stack, high byte first, so the two bytes
    /// end up in little-endian order in memory.
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    /// Pops a byte from the stack.
    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        let stack_addr = Self::STACK_BASE_ADDRESS | self.stack_pointer as u16;
        self.read_u8(stack_addr)
    }

    /// Pops a 16-bit word from the stack, low byte first.
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Reads the value an operand designates.
    pub(crate) fn operand_value(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.accumulator,
            Operand::Address(addr) => self.read_u8(addr),
            Operand::None => panic!("BUG: instruction expected a readable operand"),
        }
    }

    /// Writes a value through an operand designator.
    pub(crate) fn operand_write(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.accumulator = value,
            Operand::Address(addr) => self.write_u8(addr, value),
            Operand::None => panic!("BUG: instruction expected a writable operand"),
        }
    }

    /// Latches a non-maskable interrupt request, serviced at the next step.
    pub(crate) fn raise_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Latches a maskable interrupt request, serviced at the next step with I clear.
    pub(crate) fn raise_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Latches a reset request; the next step re-seeds PC from the reset vector.
    pub(crate) fn raise_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Consumes operand bytes for an addressing mode, leaving the program
    /// counter on the next opcode. Deposits the read/write cycle surcharges
    /// that instruction handlers add to their base costs. Indexed zero-page
    /// modes and indirect pointer fetches wrap inside page zero; absolute
    /// indexed and (indirect),Y reads pay one extra cycle on a page cross.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::None,

            AddressingMode::Accumulator => Operand::Accumulator,

            // The operand byte itself is the value; hand its address over.
            // Relative works the same way, the branch helper reads the offset.
            AddressingMode::Immediate | AddressingMode::Relative => {
                let addr = self.program_counter;
                self.program_counter = self.program_counter.wrapping_add(1);
                Operand::Address(addr)
            }

            AddressingMode::ZeroPage => {
                let addr = self.read_u8(self.program_counter) as u16;
                self.program_counter = self.program_counter.wrapping_add(1);
                self.read_cycles = 1;
                self.write_cycles = 1;
                Operand::Address(addr)
            }

            AddressingMode::ZeroPageX => {
                let base = self.read_u8(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(1);
                self.read_cycles = 2;
                self.write_cycles = 2;
                Operand::Address(base.wrapping_add(self.x_register) as u16)
            }

            AddressingMode::ZeroPageY => {
                let base = self.read_u8(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(1);
                self.read_cycles = 2;
                self.write_cycles = 2;
                Operand::Address(base.wrapping_add(self.y_register) as u16)
            }

            AddressingMode::Absolute => {
                let addr = self.read_u16(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(2);
                self.read_cycles = 2;
                self.write_cycles = 2;
                Operand::Address(addr)
            }

            AddressingMode::AbsoluteX => {
                let base = self.read_u16(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(2);
                let addr = base.wrapping_add(self.x_register as u16);
                let crossed = (base & 0xFF00) != (addr & 0xFF00);
                self.read_cycles = 2 + crossed as u8;
                self.write_cycles = 3;
                Operand::Address(addr)
            }

            AddressingMode::AbsoluteY => {
                let base = self.read_u16(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(2);
                let addr = base.wrapping_add(self.y_register as u16);
                let crossed = (base & 0xFF00) != (addr & 0xFF00);
                self.read_cycles = 2 + crossed as u8;
                self.write_cycles = 3;
                Operand::Address(addr)
            }

            AddressingMode::Indirect => {
                let ptr = self.read_u16(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(2);
                // 6502 hardware bug: when the pointer sits on the last byte of
                // a page, the high byte is fetched from the start of that same
                // page instead of the next one.
                let low = self.read_u8(ptr);
                let high = if ptr & 0x00FF == 0x00FF {
                    self.read_u8(ptr & 0xFF00)
                } else {
                    self.read_u8(ptr.wrapping_add(1))
                };
                self.read_cycles = 4;
                Operand::Address(u16::from_le_bytes([low, high]))
            }

            AddressingMode::IndirectX => {
                let base = self.read_u8(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(1);
                let ptr = base.wrapping_add(self.x_register);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                self.read_cycles = 4;
                self.write_cycles = 4;
                Operand::Address(u16::from_le_bytes([low, high]))
            }

            AddressingMode::IndirectY => {
                let ptr = self.read_u8(self.program_counter);
                self.program_counter = self.program_counter.wrapping_add(1);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([low, high]);
                let addr = base.wrapping_add(self.y_register as u16);
                let crossed = (base & 0xFF00) != (addr & 0xFF00);
                self.read_cycles = 3 + crossed as u8;
                self.write_cycles = 4;
                Operand::Address(addr)
            }
        }
    }

    /// Branch helper: centralizes behavior for all relative branches.
    /// Charges 2 cycles, plus 1 when the branch is taken, plus 1 more when the
    /// taken branch lands on a different page than the instruction's end.
    pub(crate) fn branch(&mut self, condition: bool, operand: Operand) {
        self.cycles_last += 2;
        if condition {
            self.cycles_last += 1;
            let offset = self.operand_value(operand) as i8;
            let old_pc = self.program_counter;
            self.program_counter = old_pc.wrapping_add(offset as u16);
            if (old_pc & 0xFF00) != (self.program_counter & 0xFF00) {
                self.cycles_last += 1;
            }
        }
    }

    /// Services at most one pending interrupt, in priority order NMI, RESET,
    /// IRQ. NMI and RESET fire regardless of the I flag; IRQ only with I clear.
    /// RESET re-seeds PC without touching the stack. Returns whether a request
    /// was serviced, in which case the step is complete.
    fn service_interrupt(&mut self) -> bool {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.push_u16(self.program_counter);
            self.push_interrupt_status();
            self.set_status_flag(StatusFlag::InterruptDisable, true);
            self.program_counter = self.read_u16(Self::NMI_VECTOR_ADDRESS);
        } else if self.reset_pending {
            self.reset_pending = false;
            self.set_status_flag(StatusFlag::InterruptDisable, true);
            self.program_counter = self.read_u16(Self::RESET_VECTOR_ADDRESS);
        } else if self.irq_pending && !self.get_status_flag(StatusFlag::InterruptDisable) {
            self.irq_pending = false;
            self.push_u16(self.program_counter);
            self.push_interrupt_status();
            self.set_status_flag(StatusFlag::InterruptDisable, true);
            self.program_counter = self.read_u16(Self::IRQ_VECTOR_ADDRESS);
        } else {
            return false;
        }
        self.cycles_last = 7;
        self.cycles += 7;
        self.step_count += 1;
        true
    }

    // Hardware interrupts push the status with the unused bit set and B clear,
    // which is how a handler can tell an IRQ apart from a BRK.
    fn push_interrupt_status(&mut self) {
        let mut status = self.status_register;
        status |= 1 << (StatusFlag::Unused as u8);
        status &= !(1 << (StatusFlag::BreakCommand as u8));
        self.push_u8(status);
    }

    /// Advances the machine by one instruction, or by one serviced interrupt.
    /// An opcode that does not decode leaves the program counter just past the
    /// bad byte and reports it; nothing else changes.
    pub(crate) fn step(&mut self) -> Result<(), StepError> {
        if self.service_interrupt() {
            return Ok(());
        }

        let opcode_address = self.program_counter;
        let opcode = self.read_u8(opcode_address);
        self.program_counter = opcode_address.wrapping_add(1);

        let Some(entry) = OPCODE_MAP.get(&opcode) else {
            return Err(StepError::InvalidOpcode { opcode, address: opcode_address });
        };

        self.cycles_last = 0;
        self.read_cycles = 0;
        self.write_cycles = 0;

        let operand = self.resolve_operand(entry.addressing_mode);
        (entry.handler)(self, operand);

        self.cycles += self.cycles_last as u64;
        self.step_count += 1;
        Ok(())
    }

    /// Steps until an instruction fails to decode and returns that failure.
    pub(crate) fn run(&mut self) -> StepError {
        loop {
            if let Err(error) = self.step() {
                return error;
            }
        }
    }

    /// Like run, but invokes the callback after every successful step. Hosts
    /// use this for tracing and pacing.
    pub(crate) fn run_with_callback<F>(&mut self, mut callback: F) -> StepError
    where
        F: FnMut(&mut CPU),
    {
        loop {
            if let Err(error) = self.step() {
                return error;
            }
            callback(self);
        }
    }

    /// Copies a program image into memory starting at the given address,
    /// truncating whatever would fall past the end of the address space, and
    /// points the program counter at it. Hosts may override PC afterwards.
    pub(crate) fn load_program(&mut self, program: &[u8], addr: u16) {
        let start = addr as usize;
        let count = program.len().min(self.memory.len() - start);
        self.memory[start..start + count].copy_from_slice(&program[..count]);
        self.program_counter = addr;
    }

    /// Reads a raw binary image from disk and loads it at the given address.
    pub(crate) fn load_program_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        addr: u16,
    ) -> std::io::Result<()> {
        let program = std::fs::read(path)?;
        self.load_program(&program, addr);
        Ok(())
    }
}
