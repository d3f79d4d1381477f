use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_clv(&mut self, _operand: Operand) {
        self.set_status_flag(StatusFlag::Overflow, false);
        self.cycles_last += 2;
    }
}
