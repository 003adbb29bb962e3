//! Messages of the `article.ArticleServices` service.

/// Title/body pair shared by create and update requests.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Post {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub body: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddArticleReq {
    #[prost(string, tag = "1")]
    pub author_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub content: ::core::option::Option<Post>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Article {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub author_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub content: ::core::option::Option<Post>,
    #[prost(string, tag = "4")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub updated_at: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleByIdReq {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

/// By-id read result: the article with its author joined in.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleByIdRes {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub content: ::core::option::Option<Post>,
    #[prost(message, optional, tag = "3")]
    pub author: ::core::option::Option<ArticleAuthor>,
    #[prost(string, tag = "4")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub updated_at: ::prost::alloc::string::String,
}

/// Author summary embedded in a by-id read.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArticleAuthor {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub fullname: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub updated_at: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleListReq {
    #[prost(int32, tag = "1")]
    pub offset: i32,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(string, tag = "3")]
    pub search: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetArticleListRes {
    #[prost(message, repeated, tag = "1")]
    pub articles: ::prost::alloc::vec::Vec<Article>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateArticleReq {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub content: ::core::option::Option<Post>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteArticleReq {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
