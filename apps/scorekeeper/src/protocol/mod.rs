//! Wire formats shared with collaborators.

pub mod share_token;
