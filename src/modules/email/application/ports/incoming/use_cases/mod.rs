mod send_cv_email;

pub use send_cv_email::{QueuedEmail, SendCvEmailCommand, SendCvEmailError, SendCvEmailUseCase};
