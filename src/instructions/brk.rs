use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_brk(&mut self, _operand: Operand) {
        // BRK occupies one byte but acts as two: the saved address skips the
        // padding byte after the opcode.
        self.push_u16(self.program_counter.wrapping_add(1));

        // The pushed status carries B and the unused bit, marking a software
        // interrupt. The live status register keeps B clear.
        let mut status = self.status_register;
        status |= 1 << (StatusFlag::BreakCommand as u8);
        status |= 1 << (StatusFlag::Unused as u8);
        self.push_u8(status);

        self.set_status_flag(StatusFlag::InterruptDisable, true);

        // BRK shares the IRQ vector.
        self.program_counter = self.read_u16(Self::IRQ_VECTOR_ADDRESS);
        self.cycles_last += 7;
    }
}
