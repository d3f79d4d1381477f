use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_jmp(&mut self, operand: Operand) {
        let Operand::Address(address) = operand else {
            panic!("BUG: JMP resolves to an address");
        };
        self.program_counter = address;
        self.cycles_last += 1 + self.read_cycles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_jmp_sets_program_counter() {
        let mut cpu = new_cpu();
        cpu.read_cycles = 2; // absolute operand
        cpu.handle_jmp(Operand::Address(0x1234));
        assert_eq!(cpu.program_counter, 0x1234);
        assert_eq!(cpu.cycles_last, 3);
    }
}
