mod translate_cv;

pub use translate_cv::{QueuedTranslation, TranslateCvError, TranslateCvUseCase};
