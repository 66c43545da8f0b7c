pub mod goal;
pub mod group;
pub mod status;
pub mod verify;
