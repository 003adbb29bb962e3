//! Infrastructure layer: gRPC transport to the backend services.

pub mod grpc;
