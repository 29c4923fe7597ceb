pub mod redirect_handler;
