//! UI domain: unit tests for the display-side voltage counter.

use super::volt_meter::{DisplayedVoltage, VOLT_METER_CAPACITY};

#[test]
fn test_displayed_voltage_clamps_to_capacity() {
    let mut displayed = DisplayedVoltage::default();
    assert_eq!(displayed.count(), 0);

    displayed.set(3);
    assert_eq!(displayed.count(), 3);

    displayed.set(VOLT_METER_CAPACITY + 5);
    assert_eq!(displayed.count(), VOLT_METER_CAPACITY);

    displayed.set(0);
    assert_eq!(displayed.count(), 0);
}
