use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_tya(&mut self, _operand: Operand) {
        self.accumulator = self.y_register;
        self.update_zero_negative_flags(self.accumulator);
        self.cycles_last += 2;
    }
}
