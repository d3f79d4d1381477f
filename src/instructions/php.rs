use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_php(&mut self, _operand: Operand) {
        // The pushed copy always carries B and the unused bit set.
        let mut status = self.status_register;
        status |= 1 << (StatusFlag::BreakCommand as u8);
        status |= 1 << (StatusFlag::Unused as u8);
        self.push_u8(status);
        self.cycles_last += 3;
    }
}
