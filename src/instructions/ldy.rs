use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_ldy(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        self.y_register = value;
        self.update_zero_negative_flags(value);
        self.cycles_last += 2 + self.read_cycles;
    }
}
