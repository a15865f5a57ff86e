pub mod email_body_renderer;
pub mod email_sender;

pub use email_body_renderer::{EmailBodies, EmailBodyRenderer};
pub use email_sender::{EmailSendError, EmailSender};
