use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    // The decimal flag is latched but never consulted by the arithmetic here.
    pub(crate) fn handle_cld(&mut self, _operand: Operand) {
        self.set_status_flag(StatusFlag::DecimalMode, false);
        self.cycles_last += 2;
    }
}
