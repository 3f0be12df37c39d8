use crate::Quantity;

pub type Volts = Quantity<0, 0, 0, 1>;

unit!(Volts, suffix: "V", precision: 1);

/// Electric charge in ampere-hours.
///
/// Dimensionally this is kWh/V, but the value is stored in Ah rather than kAh,
/// see the `KilowattHours / Volts` conversion.
pub type AmpereHours = Quantity<1, 0, 1, -1>;

unit!(AmpereHours, suffix: "Ah", precision: 2);
