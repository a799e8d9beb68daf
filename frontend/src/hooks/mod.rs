pub mod use_remote_list;
