pub mod daily;
pub mod heights;
pub mod location;
pub mod monthly;
pub mod provenance;
pub mod request;
