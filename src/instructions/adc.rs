use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_adc(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        let carry_in = self.get_status_flag(StatusFlag::Carry) as u16;

        // The carry participates in the addition as part of the operand.
        let operand_wide = value as u16 + carry_in;
        let sum = self.accumulator as u16 + operand_wide;
        let result = sum as u8;

        // Signed overflow: adding two values with the same sign must not flip
        // the sign of the result. A carry-in can bump the operand to exactly
        // 0x80, where the operand's sign bit no longer tells the truth; there
        // the sign of the accumulator alone decides.
        let overflow = if carry_in == 1 && value == 0x7F {
            self.accumulator & 0x80 == 0
        } else {
            let a_negative = self.accumulator & 0x80 != 0;
            let operand_negative = operand_wide & 0x80 != 0;
            let result_negative = result & 0x80 != 0;
            a_negative == operand_negative && a_negative != result_negative
        };
        self.set_status_flag(StatusFlag::Overflow, overflow);
        self.set_status_flag(StatusFlag::Carry, sum > 0xFF);

        self.accumulator = result;
        self.update_zero_negative_flags(result);
        self.cycles_last += 2 + self.read_cycles;
    }
}
