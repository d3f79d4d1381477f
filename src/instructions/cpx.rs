use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_cpx(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        let difference = self.x_register.wrapping_sub(value);
        self.set_status_flag(StatusFlag::Carry, self.x_register >= value);
        self.set_status_flag(StatusFlag::Zero, self.x_register == value);
        self.set_status_flag(StatusFlag::Negative, difference & 0x80 != 0);
        self.cycles_last += 2 + self.read_cycles;
    }
}
