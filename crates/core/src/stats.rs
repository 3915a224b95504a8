//! Execution statistics collection and reporting.
//!
//! This module tracks what a run actually did. It provides:
//! 1. **Retired count:** Total instructions executed to completion.
//! 2. **Instruction mix:** Computational versus control-transfer counts.
//! 3. **Branch behavior:** How many conditional branches were taken.
//!
//! Counters are updated by the execution engine as instructions retire and
//! reset with the machine; a halting instruction is not counted.

/// Execution statistics for a single machine.
#[derive(Debug, Clone, Default)]
pub struct ExecStats {
    /// Number of instructions executed to completion.
    pub retired: u64,
    /// Computational instructions that wrote a destination register
    /// (immediate ALU, register ALU, and upper-immediate groups).
    pub alu: u64,
    /// Conditional branches evaluated.
    pub branches: u64,
    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// Unconditional jumps (jal, jalr) completed.
    pub jumps: u64,
}

impl ExecStats {
    /// Prints a summary of the run to stdout.
    ///
    /// Percentages are computed against the retired count; an empty run
    /// prints zeros rather than dividing by zero.
    pub fn print(&self) {
        let retired = if self.retired == 0 { 1 } else { self.retired };
        let pct = |count: u64| (count as f64 / retired as f64) * 100.0;
        let taken_pct = if self.branches == 0 {
            0.0
        } else {
            (self.branches_taken as f64 / self.branches as f64) * 100.0
        };

        println!("\n==========================================================");
        println!("RV32VM EXECUTION STATISTICS");
        println!("==========================================================");
        println!("inst.retired             {}", self.retired);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.alu, pct(self.alu));
        println!(
            "  op.branch              {} ({:.2}%)",
            self.branches,
            pct(self.branches)
        );
        println!("  op.jump                {} ({:.2}%)", self.jumps, pct(self.jumps));
        println!("----------------------------------------------------------");
        println!("BRANCH BEHAVIOR");
        println!("  branch.taken           {} ({:.2}%)", self.branches_taken, taken_pct);
        println!("==========================================================");
    }
}
