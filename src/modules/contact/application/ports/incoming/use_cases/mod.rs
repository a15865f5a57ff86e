mod create_contact;
mod delete_contact;
mod get_contacts;
mod update_contact;

pub use create_contact::{CreateContactCommand, CreateContactError, CreateContactUseCase};
pub use delete_contact::{DeleteContactError, DeleteContactUseCase};
pub use get_contacts::{
    GetContactsError, GetContactsUseCase, GetCvContactsError, GetCvContactsUseCase,
    GetSingleContactError, GetSingleContactUseCase,
};
pub use update_contact::{
    PatchContactCommand, PatchContactUseCase, UpdateContactError, UpdateContactUseCase,
};
