pub mod artwork;
pub mod collaborator;
