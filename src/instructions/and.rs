use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_and(&mut self, operand: Operand) {
        let result = self.accumulator & self.operand_value(operand);
        self.accumulator = result;
        self.update_zero_negative_flags(result);
        self.cycles_last += 2 + self.read_cycles;
    }
}
