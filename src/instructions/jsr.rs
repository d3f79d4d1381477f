use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_jsr(&mut self, operand: Operand) {
        let Operand::Address(address) = operand else {
            panic!("BUG: JSR resolves to an address");
        };
        // PC already points past both operand bytes; the saved address is the
        // last byte of this instruction, and RTS compensates with its +1.
        self.push_u16(self.program_counter.wrapping_sub(1));
        self.program_counter = address;
        self.cycles_last += 4 + self.read_cycles;
    }
}
