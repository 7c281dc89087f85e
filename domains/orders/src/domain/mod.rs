pub mod entities;
pub mod state;
