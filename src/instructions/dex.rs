use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_dex(&mut self, _operand: Operand) {
        self.x_register = self.x_register.wrapping_sub(1);
        self.update_zero_negative_flags(self.x_register);
        self.cycles_last += 2;
    }
}
