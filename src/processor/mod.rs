pub mod bus;
pub mod cpu;
pub mod memory;


pub mod instruction;
pub mod instruction_set;
pub mod registers;
pub mod status_register;
