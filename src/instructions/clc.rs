use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_clc(&mut self, _operand: Operand) {
        self.set_status_flag(StatusFlag::Carry, false);
        self.cycles_last += 2;
    }
}
