pub mod contact;
pub mod handoff;
pub mod page;
pub mod status;
