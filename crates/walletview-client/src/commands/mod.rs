pub mod demo;
pub mod offers;
pub mod statement;
