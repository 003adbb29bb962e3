//! Wire shapes of the three backend services.
//!
//! Hand-maintained prost messages mirroring each service's contract. The
//! gateway depends only on these shapes and the method paths in the sibling
//! client modules — never on the backends' internals — so there is no build
//! step and no shared schema artifact.

pub mod article;
pub mod author;
pub mod authorization;
