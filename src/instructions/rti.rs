use crate::cpu6502::{Operand, StatusFlag, CPU};

impl CPU {
    pub(crate) fn handle_rti(&mut self, _operand: Operand) {
        // Status first, then the interrupted PC. The pulled B bit is dropped
        // and the unused bit forced, like PLP. No +1 here: interrupts push the
        // exact resume address.
        let status = self.pop_u8();
        self.status_register = (status & !(1 << (StatusFlag::BreakCommand as u8)))
            | (1 << (StatusFlag::Unused as u8));
        self.program_counter = self.pop_u16();
        self.cycles_last += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_rti_restores_status_and_pc() {
        let mut cpu = new_cpu();
        // As pushed by an interrupt: PC, then status.
        cpu.push_u16(0x8004);
        cpu.push_u8(0b1100_0001); // N, V, C

        cpu.handle_rti(Operand::None);

        assert_eq!(cpu.program_counter, 0x8004, "no +1 on the restored PC");
        assert!(cpu.get_status_flag(StatusFlag::Negative));
        assert!(cpu.get_status_flag(StatusFlag::Overflow));
        assert!(cpu.get_status_flag(StatusFlag::Carry));
        assert!(cpu.get_status_flag(StatusFlag::Unused), "unused bit forced on");
        assert_eq!(cpu.cycles_last, 6);
    }

    #[test]
    fn test_rti_drops_pushed_break_bit() {
        let mut cpu = new_cpu();
        cpu.push_u16(0x8004);
        cpu.push_u8(0x30); // as pushed by BRK
        cpu.handle_rti(Operand::None);
        assert!(!cpu.get_status_flag(StatusFlag::BreakCommand));
    }
}
