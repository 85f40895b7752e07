pub mod worker_message;
