pub mod control;

pub use control::wait_for_shutdown;
