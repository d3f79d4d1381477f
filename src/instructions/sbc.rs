use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_sbc(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        // A clear carry means a borrow comes into the subtraction.
        let borrow_in = !self.get_status_flag(StatusFlag::Carry) as u16;

        let operand_wide = value as u16 + borrow_in;
        let difference = (self.accumulator as u16).wrapping_sub(operand_wide);
        let result = difference as u8;

        // Signed overflow mirrors ADC: subtracting a value of the opposite
        // sign must not flip the accumulator's sign. A borrow can bump the
        // operand to exactly 0x80; there the accumulator's sign alone decides.
        let overflow = if borrow_in == 1 && value == 0x7F {
            self.accumulator & 0x80 != 0
        } else {
            let a_negative = self.accumulator & 0x80 != 0;
            let operand_negative = operand_wide & 0x80 != 0;
            let result_negative = result & 0x80 != 0;
            a_negative != operand_negative && operand_negative == result_negative
        };
        self.set_status_flag(StatusFlag::Overflow, overflow);
        // Carry reports "no borrow happened".
        self.set_status_flag(StatusFlag::Carry, difference < 0x100);

        self.accumulator = result;
        self.update_zero_negative_flags(result);
        self.cycles_last += 2 + self.read_cycles;
    }
}
