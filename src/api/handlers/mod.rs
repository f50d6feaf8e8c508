pub mod crops;
pub mod placements;
pub mod terrace;
