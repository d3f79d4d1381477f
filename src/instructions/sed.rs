use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_sed(&mut self, _operand: Operand) {
        self.set_status_flag(StatusFlag::DecimalMode, true);
        self.cycles_last += 2;
    }
}
