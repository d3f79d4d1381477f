use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_lda(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        self.accumulator = value;
        self.update_zero_negative_flags(value);
        self.cycles_last += 2 + self.read_cycles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::{new_cpu, StatusFlag};

    fn lda_with(cpu: &mut CPU, value: u8) {
        cpu.write_u8(0x0010, value);
        cpu.handle_lda(Operand::Address(0x0010));
    }

    #[test]
    fn test_lda_loads_value() {
        let mut cpu = new_cpu();
        lda_with(&mut cpu, 0x42);
        assert_eq!(cpu.accumulator, 0x42);
        assert!(!cpu.get_status_flag(StatusFlag::Zero), "Zero flag should be clear");
        assert!(!cpu.get_status_flag(StatusFlag::Negative), "Negative flag should be clear");
    }

    #[test]
    fn test_lda_sets_zero_flag() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x55;
        lda_with(&mut cpu, 0x00);
        assert_eq!(cpu.accumulator, 0x00);
        assert!(cpu.get_status_flag(StatusFlag::Zero), "Zero flag should be set");
    }

    #[test]
    fn test_lda_sets_negative_flag() {
        let mut cpu = new_cpu();
        lda_with(&mut cpu, 0x80);
        assert_eq!(cpu.accumulator, 0x80);
        assert!(cpu.get_status_flag(StatusFlag::Negative), "Negative flag should be set");
    }

    #[test]
    fn test_lda_charges_read_cycles() {
        let mut cpu = new_cpu();
        cpu.read_cycles = 1; // zero-page surcharge
        lda_with(&mut cpu, 0x42);
        assert_eq!(cpu.cycles_last, 3);
    }
}
