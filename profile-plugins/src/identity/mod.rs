pub mod aws_iam;
pub mod workload_identity;
