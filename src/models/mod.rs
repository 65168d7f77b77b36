pub mod change;
pub mod duty;
pub mod month_key;
pub mod outcome;
pub mod roster_config;
pub mod shift;
