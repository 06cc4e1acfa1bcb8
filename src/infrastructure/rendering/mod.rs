pub mod remote;
pub mod svg;
