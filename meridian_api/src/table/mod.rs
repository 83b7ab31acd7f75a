pub mod table_handler;
