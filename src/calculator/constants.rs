// Operator alphabet of the stock keypad
pub const DEFAULT_OPERATORS: &str = "+-×÷%";
