pub mod attachment;
pub mod email;
pub mod response;
