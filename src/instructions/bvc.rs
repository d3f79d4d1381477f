use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_bvc(&mut self, operand: Operand) {
        self.branch(!self.get_status_flag(StatusFlag::Overflow), operand);
    }
}
