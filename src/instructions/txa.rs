use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_txa(&mut self, _operand: Operand) {
        self.accumulator = self.x_register;
        self.update_zero_negative_flags(self.accumulator);
        self.cycles_last += 2;
    }
}
