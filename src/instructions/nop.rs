use crate::cpu6502::{Operand, CPU};

impl CPU {
    pub(crate) fn handle_nop(&mut self, _operand: Operand) {
        self.cycles_last += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu6502::new_cpu;

    #[test]
    fn test_nop_only_costs_cycles() {
        let mut cpu = new_cpu();
        let status_before = cpu.status_register;
        cpu.handle_nop(Operand::None);
        assert_eq!(cpu.status_register, status_before);
        assert_eq!(cpu.cycles_last, 2);
    }
}
