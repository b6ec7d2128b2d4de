pub mod json_file_invite_store;
