//! Messages of the `author.AuthorServices` service.
//!
//! Note the service uses 64-bit list offsets where the article service uses
//! 32-bit ones; the contracts are owned by independent teams.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAuthorReq {
    #[prost(string, tag = "1")]
    pub fullname: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Author {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub fullname: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub updated_at: ::prost::alloc::string::String,
}

/// Bare identifier, used by both the by-id read and delete.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Id {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAuthorListReq {
    #[prost(int64, tag = "1")]
    pub offset: i64,
    #[prost(int64, tag = "2")]
    pub limit: i64,
    #[prost(string, tag = "3")]
    pub search: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAuthorListRes {
    #[prost(message, repeated, tag = "1")]
    pub authors: ::prost::alloc::vec::Vec<Author>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateAuthorReq {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub fullname: ::prost::alloc::string::String,
}
