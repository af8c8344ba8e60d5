
/// End-to-end program runs and fatal faults.
pub mod simulator;
