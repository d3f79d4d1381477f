use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_bit(&mut self, operand: Operand) {
        let value = self.operand_value(operand);
        // Z comes from the masked value, N and V straight from the memory
        // operand's top bits. The accumulator itself stays untouched.
        self.set_status_flag(StatusFlag::Zero, self.accumulator & value == 0);
        self.set_status_flag(StatusFlag::Overflow, value & 0x40 != 0);
        self.set_status_flag(StatusFlag::Negative, value & 0x80 != 0);
        self.cycles_last += 2 + self.read_cycles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_cpu;

    fn bit_with(cpu: &mut CPU, value: u8) {
        cpu.write_u8(0x0010, value);
        cpu.handle_bit(Operand::Address(0x0010));
    }

    #[test]
    fn test_bit_sets_zero_when_mask_is_empty() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0x0F;
        bit_with(&mut cpu, 0x30);
        assert!(cpu.get_status_flag(StatusFlag::Zero));
        assert_eq!(cpu.accumulator, 0x0F, "BIT does not modify A");
    }

    #[test]
    fn test_bit_copies_top_bits_of_operand() {
        let mut cpu = new_cpu();
        cpu.accumulator = 0xC0;
        bit_with(&mut cpu, 0xC0);
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
        assert!(cpu.get_status_flag(StatusFlag::Overflow), "V mirrors bit 6");
        assert!(cpu.get_status_flag(StatusFlag::Negative), "N mirrors bit 7");
    }

    #[test]
    fn test_bit_clears_top_flags_from_operand() {
        let mut cpu = new_cpu();
        cpu.set_status_flag(StatusFlag::Overflow, true);
        cpu.set_status_flag(StatusFlag::Negative, true);
        cpu.accumulator = 0x01;
        bit_with(&mut cpu, 0x01);
        assert!(!cpu.get_status_flag(StatusFlag::Zero));
        assert!(!cpu.get_status_flag(StatusFlag::Overflow));
        assert!(!cpu.get_status_flag(StatusFlag::Negative));
    }
}
