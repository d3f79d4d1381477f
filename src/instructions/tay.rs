use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_tay(&mut self, _operand: Operand) {
        self.y_register = self.accumulator;
        self.update_zero_negative_flags(self.y_register);
        self.cycles_last += 2;
    }
}
