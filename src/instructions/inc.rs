use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_inc(&mut self, operand: Operand) {
        let result = self.operand_value(operand).wrapping_add(1);
        self.operand_write(operand, result);
        self.update_zero_negative_flags(result);
        self.cycles_last += 4 + self.write_cycles;
    }
}
