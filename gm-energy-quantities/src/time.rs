use crate::Quantity;

pub type Hours = Quantity<0, 0, 1, 0>;

unit!(Hours, suffix: "h", precision: 1);
