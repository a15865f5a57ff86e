pub mod askama_body_renderer;
pub mod console_sender;
pub mod smtp_sender;

pub use askama_body_renderer::AskamaEmailBodyRenderer;
pub use console_sender::ConsoleEmailSender;
pub use smtp_sender::SmtpEmailSender;
