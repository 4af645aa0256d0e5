pub(crate) mod aux_data;
pub(crate) mod derive;
pub(crate) mod derive_pubkey;
pub(crate) mod tweak;
