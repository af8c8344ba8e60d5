/// Taken branches, jumps and IF/ID flushing.
pub mod control_flow;
