pub mod assembler;
pub mod decoded;
pub mod decoder;
