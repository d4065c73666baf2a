pub mod console;
pub mod serial;
