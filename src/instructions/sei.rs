use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_sei(&mut self, _operand: Operand) {
        self.set_status_flag(StatusFlag::InterruptDisable, true);
        self.cycles_last += 2;
    }
}
