pub mod comet;
pub mod shape;
pub mod star;
pub mod trail;
