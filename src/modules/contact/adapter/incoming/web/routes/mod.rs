mod contact_handlers;
mod create_contact;

pub use contact_handlers::{
    delete_contact_handler, get_contacts_handler, get_cv_contacts_handler,
    get_single_contact_handler, patch_contact_handler, update_contact_handler,
};
pub use create_contact::{add_cv_contact_handler, create_contact_handler, ContactRequest};
