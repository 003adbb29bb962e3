//! Messages of the `authorization.AuthService` service.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginReq {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRes {
    #[prost(string, tag = "1")]
    pub token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasAccessReq {
    #[prost(string, tag = "1")]
    pub token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasAccessRes {
    #[prost(bool, tag = "1")]
    pub has_access: bool,
}
