use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_rol(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        let carry_in = self.get_status_flag(StatusFlag::Carry) as u8;
        self.set_status_flag(StatusFlag::Carry, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.operand_write(operand, result);
        self.update_zero_negative_flags(result);
        self.cycles_last += match operand {
            Operand::Accumulator => 2,
            _ => 4 + self.write_cycles,
        };
    }
}
