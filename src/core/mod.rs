pub mod backup;
pub mod lookup;
pub mod month;
pub mod mutate;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod search;
