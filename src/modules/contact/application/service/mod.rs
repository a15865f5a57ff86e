mod create_contact_service;
mod delete_contact_service;
mod get_contacts_service;
mod update_contact_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use create_contact_service::CreateContactService;
pub use delete_contact_service::DeleteContactService;
pub use get_contacts_service::{
    GetContactsService, GetCvContactsService, GetSingleContactService,
};
pub use update_contact_service::{PatchContactService, UpdateContactService};
