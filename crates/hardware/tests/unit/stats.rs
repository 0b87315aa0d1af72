//! # Statistics Tests

use slicev_core::core::signals::InstrClass;
use slicev_core::stats::SimStats;

#[test]
fn retire_updates_mix() {
    let mut stats = SimStats::default();
    for class in InstrClass::ALL {
        stats.record_retire(class);
    }
    assert_eq!(stats.instructions_retired, 11);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_jump, 2);
    assert_eq!(stats.inst_upper, 2);
    assert_eq!(stats.inst_stall, 2);
}

#[test]
fn cpi_handles_zero_instructions() {
    let mut stats = SimStats::default();
    assert!(stats.cpi().abs() < f64::EPSILON);
    stats.clocks = 24;
    stats.instructions_retired = 2;
    assert!((stats.cpi() - 12.0).abs() < f64::EPSILON);
}

#[test]
fn display_lists_sections() {
    let stats = SimStats {
        clocks: 16,
        sweeps: 2,
        instructions_retired: 1,
        inst_load: 1,
        load_wait_sweeps: 0,
        ..SimStats::default()
    };
    let text = stats.to_string();
    assert!(text.contains("sim_clocks               16"));
    assert!(text.contains("op.load"));
    assert!(text.contains("100.00%"));
    assert!(text.contains("CONTROL AND MEMORY"));
}
