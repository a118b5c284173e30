pub mod api_email;
pub mod db_email;
pub mod email_patch;
pub mod new_email;
