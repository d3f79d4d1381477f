use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_plp(&mut self, _operand: Operand) {
        // B only exists in pushed copies; the unused bit always reads as set.
        let status = self.pop_u8();
        self.status_register = (status & !(1 << (StatusFlag::BreakCommand as u8)))
            | (1 << (StatusFlag::Unused as u8));
        self.cycles_last += 4;
    }
}
