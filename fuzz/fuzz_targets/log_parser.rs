#![no_main]

use floppyplot::{ChartLayout, LogTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either load or yield an error, never panic
    if let Ok(table) = LogTable::from_reader(data) {
        let layout = ChartLayout::from_table(&table, (800, 600));
        assert_eq!(layout.panels.len(), 3);
    }
});
