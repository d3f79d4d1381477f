use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_bne(&mut self, operand: Operand) {
        self.branch(!self.get_status_flag(StatusFlag::Zero), operand);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_bne_taken_when_zero_clear() {
        let mut cpu = new_cpu();
        cpu.program_counter = 0x1002;
        cpu.write_u8(0x0050, 0xFE); // -2, a classic busy loop
        cpu.set_status_flag(StatusFlag::Zero, false);
        cpu.handle_bne(Operand::Address(0x0050));
        assert_eq!(cpu.program_counter, 0x1000);
    }

    #[test]
    fn test_bne_not_taken_when_zero_set() {
        let mut cpu = new_cpu();
        cpu.program_counter = 0x1002;
        cpu.write_u8(0x0050, 0xFE);
        cpu.set_status_flag(StatusFlag::Zero, true);
        cpu.handle_bne(Operand::Address(0x0050));
        assert_eq!(cpu.program_counter, 0x1002);
    }
}
